//! Feed API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p feed-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use feed_common::{init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Keeps the log file writer alive until shutdown
    let _guard = init_tracing_with_config(TracingConfig::for_environment(
        config.app.env,
        &config.logging,
    ));

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        storage = ?config.storage,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = feed_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
