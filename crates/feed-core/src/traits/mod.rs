//! Repository traits

mod repositories;

pub use repositories::{PostRepository, ReactionRepository, RepoResult};
