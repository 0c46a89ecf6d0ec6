//! In-memory implementation of PostRepository

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use feed_core::entities::{NewPost, Post};
use feed_core::traits::{PostRepository, RepoResult};
use feed_core::value_objects::{PostId, UserId};

/// Posts kept in a map ordered by id
///
/// Ids start at 1 and are never reused, matching a `BIGSERIAL` column.
#[derive(Debug)]
pub struct InMemoryPostRepository {
    posts: RwLock<BTreeMap<PostId, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored posts
    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.posts.read().get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Post>> {
        Ok(self
            .posts
            .read()
            .values()
            .filter(|post| post.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    #[instrument(skip(self, post), fields(user_id = %post.user_id))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let id = PostId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let stored = post.clone().into_post(id);
        self.posts.write().insert(id, stored.clone());
        Ok(stored)
    }

    #[instrument(skip(self, title, text))]
    async fn update_content(
        &self,
        id: PostId,
        title: &str,
        text: Option<&str>,
    ) -> RepoResult<Option<Post>> {
        let mut posts = self.posts.write();
        Ok(posts.get_mut(&id).map(|post| {
            post.edit(title.to_string(), text.map(str::to_string));
            post.clone()
        }))
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: PostId) -> RepoResult<Option<Post>> {
        let mut posts = self.posts.write();
        Ok(posts.get_mut(&id).map(|post| {
            post.record_view();
            post.clone()
        }))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId) -> RepoResult<bool> {
        Ok(self.posts.write().remove(&id).is_some())
    }
}
