//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use feed_common::{AppConfig, AppError, StorageBackend, TracingRecorder};
use feed_db::{create_pool, run_migrations, PgPostRepository, PgReactionRepository};
use feed_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let recorder = Arc::new(TracingRecorder);

    let service_context = match config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            ServiceContext::in_memory(recorder)
        }
        StorageBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::config("DATABASE_URL is required for postgres storage"))?;

            info!("Connecting to PostgreSQL...");
            let db_config = feed_db::DatabaseConfig::new(
                database.url.clone(),
                database.max_connections,
                database.min_connections,
            );
            let pool = create_pool(&db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            info!("Running migrations...");
            run_migrations(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("Migrations applied");

            ServiceContext::new(
                Arc::new(PgPostRepository::new(pool.clone())),
                Arc::new(PgReactionRepository::new(pool)),
                recorder,
            )
        }
    };

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::config(format!("Failed to read listener address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}
