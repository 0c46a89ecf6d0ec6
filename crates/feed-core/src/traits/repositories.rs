//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Repositories hold no business rules.

use async_trait::async_trait;

use crate::entities::{NewPost, Polarity, Post, Reaction};
use crate::error::DomainError;
use crate::value_objects::{PostId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// List posts owned by a user, ordered by id
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Post>>;

    /// Store a new post and return it with its assigned id
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// Replace title and body. Returns `None` if the post does not exist.
    async fn update_content(
        &self,
        id: PostId,
        title: &str,
        text: Option<&str>,
    ) -> RepoResult<Option<Post>>;

    /// Atomically add one to the view count. Returns `None` if the post does not exist.
    async fn increment_views(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// Delete a post. Returns whether a row was removed.
    async fn delete(&self, id: PostId) -> RepoResult<bool>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction of a user on a post
    async fn find(&self, user_id: UserId, post_id: PostId) -> RepoResult<Option<Reaction>>;

    /// Get all reactions for a post
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Reaction>>;

    /// Add a reaction. Fails with `ReactionAlreadyExists` if the pair already has one.
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Overwrite the polarity of an existing reaction.
    /// Fails with `ReactionNotFound` if the row is gone.
    async fn update_polarity(
        &self,
        user_id: UserId,
        post_id: PostId,
        polarity: Polarity,
    ) -> RepoResult<()>;

    /// Remove a reaction. Returns whether a row was removed.
    async fn delete(&self, user_id: UserId, post_id: PostId) -> RepoResult<bool>;

    /// Remove all reactions from a post, returning how many were removed
    async fn delete_by_post(&self, post_id: PostId) -> RepoResult<u64>;
}
