//! Reaction service
//!
//! Likes, dislikes and their removal, plus the per-post summary.
//!
//! Each change holds its post's lock shared, so the post cannot be deleted
//! underneath it, and runs under the lock of its (user, post) pair: the
//! stored row is read, [`ReactionState::on`] decides the effect, and the
//! effect is written.
//! If another process changed the row in between (duplicate insert, or the row
//! vanished) the decision is made once more from a fresh read.

use feed_core::entities::{Polarity, Reaction, ReactionEvent, ReactionState, ReactionSummary, ReactionTransition};
use feed_core::error::DomainError;
use feed_core::{PostId, UserId};
use tracing::{debug, instrument};

use crate::dto::{ReactionSummaryResponse, Reply};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::post::require_post;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like or dislike a post. Repeating the same reaction is a no-op.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        post_id: PostId,
        user_id: UserId,
        polarity: Polarity,
    ) -> ServiceResult<Reply<()>> {
        let action = match polarity {
            Polarity::Like => "liking",
            Polarity::Dislike => "disliking",
        };
        let result = self
            .apply(post_id, user_id, ReactionEvent::React(polarity))
            .await
            .map_err(|e| e.with_context(format!("{action} post #{post_id} by user #{user_id}")));
        self.ctx.record(result)
    }

    /// Like a post
    pub async fn like(&self, post_id: PostId, user_id: UserId) -> ServiceResult<Reply<()>> {
        self.react(post_id, user_id, Polarity::Like).await
    }

    /// Dislike a post
    pub async fn dislike(&self, post_id: PostId, user_id: UserId) -> ServiceResult<Reply<()>> {
        self.react(post_id, user_id, Polarity::Dislike).await
    }

    /// Withdraw the user's reaction. Fails if there is none.
    #[instrument(skip(self))]
    pub async fn remove_reaction(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> ServiceResult<Reply<()>> {
        let result = self
            .apply(post_id, user_id, ReactionEvent::Remove)
            .await
            .map_err(|e| {
                e.with_context(format!(
                    "removing reaction from post #{post_id} by user #{user_id}"
                ))
            });
        self.ctx.record(result)
    }

    /// Count likes and dislikes of a post
    #[instrument(skip(self))]
    pub async fn get_summary(&self, post_id: PostId) -> ServiceResult<Reply<ReactionSummaryResponse>> {
        let result = self
            .summary(post_id)
            .await
            .map(|summary| Reply::data(vec![summary.into()]))
            .map_err(|e| e.with_context(format!("getting reactions of post #{post_id}")));
        self.ctx.record(result)
    }

    async fn summary(&self, post_id: PostId) -> ServiceResult<ReactionSummary> {
        require_post(self.ctx, post_id).await?;
        let reactions = self.ctx.reaction_repo().find_by_post(post_id).await?;
        Ok(ReactionSummary::from_reactions(&reactions))
    }

    async fn apply(
        &self,
        post_id: PostId,
        user_id: UserId,
        event: ReactionEvent,
    ) -> ServiceResult<Reply<()>> {
        let _post_guard = self.ctx.post_locks().read(post_id).await;
        require_post(self.ctx, post_id).await?;

        let _guard = self.ctx.reaction_locks().acquire(user_id, post_id).await;

        let outcome = match self.transition(post_id, user_id, event).await {
            Err(e) if e.is_retryable() => {
                debug!(post_id = %post_id, user_id = %user_id, error = %e, "Reaction changed concurrently, retrying");
                self.transition(post_id, user_id, event).await
            }
            other => other,
        };

        outcome.map_err(|e| {
            if e.is_retryable() {
                ServiceError::conflict(format!(
                    "Reaction of user #{user_id} on post #{post_id} was changed concurrently"
                ))
            } else {
                e
            }
        })
    }

    async fn transition(
        &self,
        post_id: PostId,
        user_id: UserId,
        event: ReactionEvent,
    ) -> ServiceResult<Reply<()>> {
        let repo = self.ctx.reaction_repo();
        let current = repo.find(user_id, post_id).await?;

        let message = match ReactionState::of(current.as_ref()).on(event) {
            ReactionTransition::Insert(polarity) => {
                repo.create(&Reaction::new(user_id, post_id, polarity)).await?;
                format!(
                    "User #{user_id} successfully {} post #{post_id}",
                    polarity.verb()
                )
            }
            ReactionTransition::Flip { from, to } => {
                repo.update_polarity(user_id, post_id, to).await?;
                format!(
                    "User #{user_id} removed {} and {} post #{post_id}",
                    from.noun(),
                    to.verb()
                )
            }
            ReactionTransition::Unchanged(polarity) => {
                format!("User #{user_id} already {} post #{post_id}", polarity.verb())
            }
            ReactionTransition::Delete => {
                if !repo.delete(user_id, post_id).await? {
                    return Err(DomainError::ReactionNotFound.into());
                }
                format!("User #{user_id} removed reaction from post #{post_id}")
            }
            ReactionTransition::RejectRemove => {
                return Err(ServiceError::conflict(format!(
                    "User #{user_id} has not reacted to post #{post_id} yet"
                )));
            }
        };

        Ok(Reply::message(message))
    }
}
