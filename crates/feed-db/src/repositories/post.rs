//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{NewPost, Post};
use feed_core::traits::{PostRepository, RepoResult};
use feed_core::value_objects::{PostId, UserId};

use crate::mappers::PostInsert;
use crate::models::PostModel;

use super::error::{map_db_error, map_owner_violation};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, title, text, views, user_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, title, text, views, user_id
            FROM posts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self, post), fields(user_id = %post.user_id))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let insert = PostInsert::new(post);

        let model = sqlx::query_as::<_, PostModel>(
            r#"
            INSERT INTO posts (title, text, views, user_id)
            VALUES ($1, $2, 0, $3)
            RETURNING id, title, text, views, user_id
            "#,
        )
        .bind(insert.title)
        .bind(insert.text)
        .bind(insert.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_owner_violation(e, post.user_id))?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self, title, text))]
    async fn update_content(
        &self,
        id: PostId,
        title: &str,
        text: Option<&str>,
    ) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            UPDATE posts
            SET title = $2, text = $3
            WHERE id = $1
            RETURNING id, title, text, views, user_id
            "#,
        )
        .bind(id.into_inner())
        .bind(title)
        .bind(text)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            UPDATE posts
            SET views = views + 1
            WHERE id = $1
            RETURNING id, title, text, views, user_id
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
