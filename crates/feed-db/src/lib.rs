//! # feed-db
//!
//! Persistence layer implementing the feed-core repository traits.
//!
//! ## Overview
//!
//! - PostgreSQL repositories via SQLx, with connection pool management and
//!   the schema migrations under `migrations/`
//! - Database models with SQLx `FromRow` derives and entity mappers
//! - In-memory repositories for the `memory` backend and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feed_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use feed_db::PgPostRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let post_repo = PgPostRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{InMemoryPostRepository, InMemoryReactionRepository};
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgPostRepository, PgReactionRepository};
