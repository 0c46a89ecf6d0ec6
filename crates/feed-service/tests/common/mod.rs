//! Shared fixtures for service tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use feed_common::telemetry::MemoryRecorder;
use feed_core::entities::{NewPost, Polarity, Post, Reaction};
use feed_core::error::DomainError;
use feed_core::traits::{PostRepository, ReactionRepository, RepoResult};
use feed_core::{PostId, UserId};
use feed_db::{InMemoryPostRepository, InMemoryReactionRepository};
use feed_service::{
    CreatePostRequest, PostService, ReactionSummaryResponse, ReactionService, ServiceContext,
    ServiceContextBuilder,
};

pub const ALICE: UserId = UserId::new(1);
pub const BOB: UserId = UserId::new(2);
pub const CAROL: UserId = UserId::new(3);

/// In-memory context plus the recorder it reports to
pub fn context() -> (ServiceContext, MemoryRecorder) {
    let recorder = MemoryRecorder::new();
    let ctx = ServiceContext::in_memory(Arc::new(recorder.clone()));
    (ctx, recorder)
}

pub fn request(title: &str, text: Option<&str>) -> CreatePostRequest {
    CreatePostRequest {
        title: title.to_string(),
        text: text.map(str::to_string),
    }
}

/// Publish a post and return its id
pub async fn publish(ctx: &ServiceContext, owner: UserId, title: &str) -> PostId {
    let reply = PostService::new(ctx)
        .create_post(owner, request(title, Some("body")))
        .await
        .unwrap();
    let data = reply.data.unwrap();
    PostId::new(data[0].id)
}

pub async fn summary(ctx: &ServiceContext, post_id: PostId) -> ReactionSummaryResponse {
    let reply = ReactionService::new(ctx).get_summary(post_id).await.unwrap();
    reply.data.unwrap()[0]
}

pub fn counts(s: ReactionSummaryResponse) -> (u64, u64, u64) {
    (s.total_reactions, s.likes, s.dislikes)
}

/// Post repository whose every call fails like a lost database connection
pub struct BrokenPostRepository;

#[async_trait]
impl PostRepository for BrokenPostRepository {
    async fn find_by_id(&self, _id: PostId) -> RepoResult<Option<Post>> {
        Err(broken())
    }

    async fn find_by_user(&self, _user_id: UserId) -> RepoResult<Vec<Post>> {
        Err(broken())
    }

    async fn create(&self, _post: &NewPost) -> RepoResult<Post> {
        Err(broken())
    }

    async fn update_content(
        &self,
        _id: PostId,
        _title: &str,
        _text: Option<&str>,
    ) -> RepoResult<Option<Post>> {
        Err(broken())
    }

    async fn increment_views(&self, _id: PostId) -> RepoResult<Option<Post>> {
        Err(broken())
    }

    async fn delete(&self, _id: PostId) -> RepoResult<bool> {
        Err(broken())
    }
}

pub fn broken() -> DomainError {
    DomainError::DatabaseError("connection refused".to_string())
}

pub fn broken_context() -> (ServiceContext, MemoryRecorder) {
    let recorder = MemoryRecorder::new();
    let ctx = ServiceContextBuilder::new()
        .post_repo(Arc::new(BrokenPostRepository))
        .reaction_repo(Arc::new(InMemoryReactionRepository::new()))
        .recorder(Arc::new(recorder.clone()))
        .build()
        .unwrap();
    (ctx, recorder)
}

/// Reaction repository that loses the first insert race: the first `create`
/// finds the row already written by "another process".
pub struct RacingReactionRepository {
    inner: InMemoryReactionRepository,
    raced: std::sync::atomic::AtomicBool,
    rival: Polarity,
}

impl RacingReactionRepository {
    pub fn new(rival: Polarity) -> Self {
        Self {
            inner: InMemoryReactionRepository::new(),
            raced: std::sync::atomic::AtomicBool::new(false),
            rival,
        }
    }
}

#[async_trait]
impl ReactionRepository for RacingReactionRepository {
    async fn find(&self, user_id: UserId, post_id: PostId) -> RepoResult<Option<Reaction>> {
        self.inner.find(user_id, post_id).await
    }

    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Reaction>> {
        self.inner.find_by_post(post_id).await
    }

    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        if !self.raced.swap(true, std::sync::atomic::Ordering::SeqCst) {
            let rival = Reaction::new(reaction.user_id, reaction.post_id, self.rival);
            self.inner.create(&rival).await?;
        }
        self.inner.create(reaction).await
    }

    async fn update_polarity(
        &self,
        user_id: UserId,
        post_id: PostId,
        polarity: Polarity,
    ) -> RepoResult<()> {
        self.inner.update_polarity(user_id, post_id, polarity).await
    }

    async fn delete(&self, user_id: UserId, post_id: PostId) -> RepoResult<bool> {
        self.inner.delete(user_id, post_id).await
    }

    async fn delete_by_post(&self, post_id: PostId) -> RepoResult<u64> {
        self.inner.delete_by_post(post_id).await
    }
}

pub fn racing_context(rival: Polarity) -> ServiceContext {
    ServiceContextBuilder::new()
        .post_repo(Arc::new(InMemoryPostRepository::new()))
        .reaction_repo(Arc::new(RacingReactionRepository::new(rival)))
        .recorder(Arc::new(MemoryRecorder::new()))
        .build()
        .unwrap()
}

/// Post repository whose first lookup stalls after reading the post,
/// as if the caller were descheduled right after its existence check
pub struct StallingPostRepository {
    inner: InMemoryPostRepository,
    stalled: std::sync::atomic::AtomicBool,
}

impl StallingPostRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemoryPostRepository::new(),
            stalled: std::sync::atomic::AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl PostRepository for StallingPostRepository {
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let post = self.inner.find_by_id(id).await?;
        if !self.stalled.swap(true, std::sync::atomic::Ordering::SeqCst) {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
        Ok(post)
    }

    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Post>> {
        self.inner.find_by_user(user_id).await
    }

    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        self.inner.create(post).await
    }

    async fn update_content(
        &self,
        id: PostId,
        title: &str,
        text: Option<&str>,
    ) -> RepoResult<Option<Post>> {
        self.inner.update_content(id, title, text).await
    }

    async fn increment_views(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.inner.increment_views(id).await
    }

    async fn delete(&self, id: PostId) -> RepoResult<bool> {
        self.inner.delete(id).await
    }
}

pub fn stalling_context() -> ServiceContext {
    ServiceContextBuilder::new()
        .post_repo(Arc::new(StallingPostRepository::new()))
        .reaction_repo(Arc::new(InMemoryReactionRepository::new()))
        .recorder(Arc::new(MemoryRecorder::new()))
        .build()
        .unwrap()
}
