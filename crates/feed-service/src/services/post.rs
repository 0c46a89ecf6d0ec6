//! Post service
//!
//! Publishing, reading, editing, deleting and viewing posts.

use feed_core::entities::{validate_title, NewPost, Post};
use feed_core::{PostId, UserId};
use tracing::instrument;

use crate::dto::{CreatePostRequest, PostResponse, Reply, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a new post owned by `user_id`
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        user_id: UserId,
        request: CreatePostRequest,
    ) -> ServiceResult<Reply<PostResponse>> {
        let result = self
            .publish(user_id, request)
            .await
            .map_err(|e| e.with_context(format!("publishing a post by user #{user_id}")));
        self.ctx.record(result)
    }

    async fn publish(
        &self,
        user_id: UserId,
        request: CreatePostRequest,
    ) -> ServiceResult<Reply<PostResponse>> {
        let draft = NewPost::new(request.title, request.text, user_id)?;
        let post = self.ctx.post_repo().create(&draft).await?;

        Ok(Reply::with_item(
            format!("User #{user_id} successfully published post #{}", post.id),
            post.into(),
        ))
    }

    /// Get a single post
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: PostId) -> ServiceResult<Reply<PostResponse>> {
        let result = require_post(self.ctx, post_id)
            .await
            .map(|post| Reply::data(vec![post.into()]))
            .map_err(|e| e.with_context(format!("getting post #{post_id}")));
        self.ctx.record(result)
    }

    /// List the posts of a user in id order
    #[instrument(skip(self))]
    pub async fn list_user_posts(&self, user_id: UserId) -> ServiceResult<Reply<PostResponse>> {
        let result = self
            .ctx
            .post_repo()
            .find_by_user(user_id)
            .await
            .map(|posts| Reply::data(posts.into_iter().map(PostResponse::from).collect()))
            .map_err(|e| {
                ServiceError::from(e).with_context(format!("getting posts of user #{user_id}"))
            });
        self.ctx.record(result)
    }

    /// Replace title and body of a post. Only the owner may edit.
    #[instrument(skip(self, request))]
    pub async fn edit_post(
        &self,
        post_id: PostId,
        user_id: UserId,
        request: UpdatePostRequest,
    ) -> ServiceResult<Reply<PostResponse>> {
        let result = self
            .edit(post_id, user_id, request)
            .await
            .map_err(|e| e.with_context(format!("editing post #{post_id} by user #{user_id}")));
        self.ctx.record(result)
    }

    async fn edit(
        &self,
        post_id: PostId,
        user_id: UserId,
        request: UpdatePostRequest,
    ) -> ServiceResult<Reply<PostResponse>> {
        let post = require_post(self.ctx, post_id).await?;
        require_owner(&post, user_id, "edit")?;
        validate_title(&request.title)?;

        let updated = self
            .ctx
            .post_repo()
            .update_content(post_id, &request.title, request.text.as_deref())
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id))?;

        Ok(Reply::with_item(
            format!("Post #{post_id} successfully edited by user #{user_id}"),
            updated.into(),
        ))
    }

    /// Delete a post together with its reactions. Only the owner may delete.
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: PostId, user_id: UserId) -> ServiceResult<Reply<()>> {
        let result = self
            .delete(post_id, user_id)
            .await
            .map_err(|e| e.with_context(format!("deleting post #{post_id} by user #{user_id}")));
        self.ctx.record(result)
    }

    async fn delete(&self, post_id: PostId, user_id: UserId) -> ServiceResult<Reply<()>> {
        // Waits for in-flight reaction changes; new ones see the post gone.
        let _post_guard = self.ctx.post_locks().write(post_id).await;
        let post = require_post(self.ctx, post_id).await?;
        require_owner(&post, user_id, "delete")?;

        let removed = self.ctx.reaction_repo().delete_by_post(post_id).await?;
        tracing::debug!(post_id = %post_id, removed, "Reactions removed with post");

        if !self.ctx.post_repo().delete(post_id).await? {
            return Err(ServiceError::not_found("Post", post_id));
        }

        Ok(Reply::message(format!("Post #{post_id} successfully deleted")))
    }

    /// Count one view of a post. Anyone may view, the author included.
    #[instrument(skip(self))]
    pub async fn view_post(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> ServiceResult<Reply<PostResponse>> {
        let result = self
            .ctx
            .post_repo()
            .increment_views(post_id)
            .await
            .map_err(ServiceError::from)
            .and_then(|post| post.ok_or_else(|| ServiceError::not_found("Post", post_id)))
            .map(|post| {
                Reply::with_item(
                    format!("Post #{post_id} successfully viewed by user #{user_id}"),
                    post.into(),
                )
            })
            .map_err(|e| e.with_context(format!("viewing post #{post_id} by user #{user_id}")));
        self.ctx.record(result)
    }
}

/// Load a post or fail with "Post #P does not exist"
pub(crate) async fn require_post(ctx: &ServiceContext, post_id: PostId) -> ServiceResult<Post> {
    ctx.post_repo()
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Post", post_id))
}

fn require_owner(post: &Post, user_id: UserId, action: &str) -> ServiceResult<()> {
    if post.is_owned_by(user_id) {
        Ok(())
    } else {
        Err(ServiceError::permission_denied(format!(
            "User #{user_id} is not allowed to {action} post #{}",
            post.id
        )))
    }
}
