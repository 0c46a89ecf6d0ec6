//! In-memory repositories
//!
//! Used for the `memory` storage backend and in tests. State lives only as
//! long as the process.

mod post;
mod reaction;

pub use post::InMemoryPostRepository;
pub use reaction::InMemoryReactionRepository;
