//! In-memory implementation of ReactionRepository

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::instrument;

use feed_core::entities::{Polarity, Reaction};
use feed_core::error::DomainError;
use feed_core::traits::{ReactionRepository, RepoResult};
use feed_core::value_objects::{PostId, UserId};

/// Reactions keyed by (user, post)
///
/// The map key enforces the one-reaction-per-pair rule the same way the
/// primary key does in PostgreSQL.
#[derive(Debug, Default)]
pub struct InMemoryReactionRepository {
    reactions: DashMap<(UserId, PostId), Polarity>,
}

impl InMemoryReactionRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored reactions
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: UserId, post_id: PostId) -> RepoResult<Option<Reaction>> {
        Ok(self
            .reactions
            .get(&(user_id, post_id))
            .map(|polarity| Reaction::new(user_id, post_id, *polarity)))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Reaction>> {
        let mut reactions: Vec<Reaction> = self
            .reactions
            .iter()
            .filter(|entry| entry.key().1 == post_id)
            .map(|entry| Reaction::new(entry.key().0, post_id, *entry.value()))
            .collect();
        reactions.sort_by_key(|r| r.user_id);
        Ok(reactions)
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        match self.reactions.entry((reaction.user_id, reaction.post_id)) {
            Entry::Occupied(_) => Err(DomainError::ReactionAlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(reaction.polarity);
                Ok(())
            }
        }
    }

    #[instrument(skip(self))]
    async fn update_polarity(
        &self,
        user_id: UserId,
        post_id: PostId,
        polarity: Polarity,
    ) -> RepoResult<()> {
        match self.reactions.get_mut(&(user_id, post_id)) {
            Some(mut stored) => {
                *stored = polarity;
                Ok(())
            }
            None => Err(DomainError::ReactionNotFound),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: UserId, post_id: PostId) -> RepoResult<bool> {
        Ok(self.reactions.remove(&(user_id, post_id)).is_some())
    }

    #[instrument(skip(self))]
    async fn delete_by_post(&self, post_id: PostId) -> RepoResult<u64> {
        let mut removed = 0_u64;
        self.reactions.retain(|(_, post), _| {
            let keep = *post != post_id;
            if !keep {
                removed += 1;
            }
            keep
        });
        Ok(removed)
    }
}
