//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{Polarity, Reaction};
use feed_core::error::DomainError;
use feed_core::traits::{ReactionRepository, RepoResult};
use feed_core::value_objects::{PostId, UserId};

use crate::mappers::ReactionInsert;
use crate::models::ReactionModel;

use super::error::{map_db_error, map_reaction_insert_error};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: UserId, post_id: PostId) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT user_id, post_id, is_like
            FROM post_reactions
            WHERE user_id = $1 AND post_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(post_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT user_id, post_id, is_like
            FROM post_reactions
            WHERE post_id = $1
            ORDER BY user_id
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        let insert = ReactionInsert::new(reaction);

        sqlx::query(
            r#"
            INSERT INTO post_reactions (user_id, post_id, is_like)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(insert.user_id)
        .bind(insert.post_id)
        .bind(insert.is_like)
        .execute(&self.pool)
        .await
        .map_err(|e| map_reaction_insert_error(e, reaction.user_id, reaction.post_id))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_polarity(
        &self,
        user_id: UserId,
        post_id: PostId,
        polarity: Polarity,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE post_reactions
            SET is_like = $3
            WHERE user_id = $1 AND post_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(post_id.into_inner())
        .bind(polarity.is_like())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReactionNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: UserId, post_id: PostId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM post_reactions WHERE user_id = $1 AND post_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(post_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_by_post(&self, post_id: PostId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM post_reactions WHERE post_id = $1
            "#,
        )
        .bind(post_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
