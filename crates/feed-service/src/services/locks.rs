//! Per-pair reaction locks and per-post locks
//!
//! Reading the stored reaction, deciding the transition and writing it back
//! must not interleave for the same (user, post) pair. Each pair gets its own
//! async mutex, created on first use and dropped once nobody holds or waits
//! on it.
//!
//! Reaction changes also hold their post's lock shared, and deleting a post
//! holds it exclusively, so no reaction can be written after its post's
//! reactions were cascaded away. The post lock is always taken first.

use std::sync::Arc;

use dashmap::DashMap;
use feed_core::{PostId, UserId};
use tokio::sync::{Mutex, OwnedMutexGuard, OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};

type LockKey = (UserId, PostId);
type LockMap = DashMap<LockKey, Arc<Mutex<()>>>;

/// Registry of per-pair reaction locks
#[derive(Clone, Default)]
pub struct ReactionLocks {
    locks: Arc<LockMap>,
}

impl ReactionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to the reaction of `user_id` on `post_id`
    pub async fn acquire(&self, user_id: UserId, post_id: PostId) -> ReactionGuard {
        let key = (user_id, post_id);
        // The map entry must be released before awaiting the mutex.
        let mutex = self
            .locks
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();

        let guard = mutex.lock_owned().await;

        ReactionGuard {
            key,
            guard: Some(guard),
            locks: Arc::clone(&self.locks),
        }
    }

    /// Number of pairs that currently have a lock entry
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl std::fmt::Debug for ReactionLocks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionLocks")
            .field("active", &self.locks.len())
            .finish()
    }
}

/// Exclusive access to one (user, post) reaction; released on drop
pub struct ReactionGuard {
    key: LockKey,
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<LockMap>,
}

impl Drop for ReactionGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Only the map itself still references the mutex: no holder, no waiter.
        self.locks
            .remove_if(&self.key, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}

type PostLockMap = DashMap<PostId, Arc<RwLock<()>>>;

/// Registry of per-post locks
#[derive(Clone, Default)]
pub struct PostLocks {
    locks: Arc<PostLockMap>,
}

impl PostLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, post_id: PostId) -> Arc<RwLock<()>> {
        self.locks
            .entry(post_id)
            .or_insert_with(|| Arc::new(RwLock::new(())))
            .value()
            .clone()
    }

    /// Shared access: the post cannot be deleted while held
    pub async fn read(&self, post_id: PostId) -> PostGuard {
        let guard = self.lock_for(post_id).read_owned().await;
        PostGuard {
            post_id,
            guard: Some(PostGuardKind::Read(guard)),
            locks: Arc::clone(&self.locks),
        }
    }

    /// Exclusive access: waits for every reaction change on the post to finish
    pub async fn write(&self, post_id: PostId) -> PostGuard {
        let guard = self.lock_for(post_id).write_owned().await;
        PostGuard {
            post_id,
            guard: Some(PostGuardKind::Write(guard)),
            locks: Arc::clone(&self.locks),
        }
    }

    /// Number of posts that currently have a lock entry
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl std::fmt::Debug for PostLocks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostLocks")
            .field("active", &self.locks.len())
            .finish()
    }
}

enum PostGuardKind {
    Read(OwnedRwLockReadGuard<()>),
    Write(OwnedRwLockWriteGuard<()>),
}

/// Shared or exclusive access to one post; released on drop
pub struct PostGuard {
    post_id: PostId,
    guard: Option<PostGuardKind>,
    locks: Arc<PostLockMap>,
}

impl Drop for PostGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks
            .remove_if(&self.post_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
