//! Business logic services
//!
//! Services validate input, enforce ownership, drive the reaction state
//! machine and turn every outcome into a [`Reply`](crate::dto::Reply) or a
//! [`ServiceError`].

pub mod context;
pub mod error;
pub mod locks;
pub mod post;
pub mod reaction;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use locks::{PostGuard, PostLocks, ReactionGuard, ReactionLocks};
pub use post::PostService;
pub use reaction::ReactionService;
