//! # feed-core
//!
//! Domain layer containing entities, value objects, the reaction state machine
//! and repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    validate_title, NewPost, Polarity, Post, Reaction, ReactionEvent, ReactionState,
    ReactionSummary, ReactionTransition,
};
pub use error::DomainError;
pub use traits::{PostRepository, ReactionRepository, RepoResult};
pub use value_objects::{IdParseError, PostId, UserId};
