//! # feed-common
//!
//! Shared utilities including configuration, error handling, token verification, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LoggingConfig, ServerConfig, StorageBackend,
};
pub use error::AppError;
pub use telemetry::{
    init_tracing_with_config, try_init_tracing_with_config, EventRecorder, MemoryRecorder,
    TracingConfig, TracingError, TracingRecorder,
};
