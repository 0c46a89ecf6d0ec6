//! Service context - dependency container for services
//!
//! Holds the repositories, the outcome recorder, and the post and reaction locks.

use std::sync::Arc;

use feed_common::telemetry::{EventRecorder, TracingRecorder};
use feed_core::traits::{PostRepository, ReactionRepository};
use feed_db::{InMemoryPostRepository, InMemoryReactionRepository};
use tracing::Level;

use super::error::{ErrorKind, ServiceError, ServiceResult};
use super::locks::{PostLocks, ReactionLocks};
use crate::dto::Reply;

/// Service context containing all dependencies
///
/// Cheap to clone; every clone shares the same repositories and locks.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    post_repo: Arc<dyn PostRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    // Observability
    recorder: Arc<dyn EventRecorder>,

    // Concurrency
    post_locks: PostLocks,
    reaction_locks: ReactionLocks,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        recorder: Arc<dyn EventRecorder>,
    ) -> Self {
        Self {
            post_repo,
            reaction_repo,
            recorder,
            post_locks: PostLocks::new(),
            reaction_locks: ReactionLocks::new(),
        }
    }

    /// Context backed by fresh in-memory repositories
    pub fn in_memory(recorder: Arc<dyn EventRecorder>) -> Self {
        Self::new(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryReactionRepository::new()),
            recorder,
        )
    }

    // === Repositories ===

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Observability ===

    /// Record the outcome message of an operation and hand the result back
    ///
    /// Successes go out at INFO, expected rejections at WARN, and
    /// persistence failures at ERROR together with the raw detail.
    pub fn record<T>(&self, result: ServiceResult<Reply<T>>) -> ServiceResult<Reply<T>> {
        match &result {
            Ok(reply) => {
                if let Some(message) = reply.message.as_deref() {
                    self.recorder.record(Level::INFO, message);
                }
            }
            Err(err) => self.record_error(err),
        }
        result
    }

    fn record_error(&self, err: &ServiceError) {
        match (err.kind(), err.details()) {
            (ErrorKind::Persistence, Some(detail)) => self
                .recorder
                .record(Level::ERROR, &format!("{err}: {detail}")),
            (ErrorKind::Persistence, None) => {
                self.recorder.record(Level::ERROR, &err.to_string());
            }
            _ => self.recorder.record(Level::WARN, &err.to_string()),
        }
    }

    // === Concurrency ===

    /// Get the per-post locks
    pub fn post_locks(&self) -> &PostLocks {
        &self.post_locks
    }

    /// Get the per-pair reaction locks
    pub fn reaction_locks(&self) -> &ReactionLocks {
        &self.reaction_locks
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("post_locks", &self.post_locks)
            .field("reaction_locks", &self.reaction_locks)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    post_repo: Option<Arc<dyn PostRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    recorder: Option<Arc<dyn EventRecorder>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            post_repo: None,
            reaction_repo: None,
            recorder: None,
        }
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    /// Defaults to [`TracingRecorder`] when not set
    pub fn recorder(mut self, recorder: Arc<dyn EventRecorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.recorder.unwrap_or_else(|| Arc::new(TracingRecorder)),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
