//! Post entity - a titled entry in the feed owned by its author

use crate::error::DomainError;
use crate::value_objects::{PostId, UserId};

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub text: Option<String>,
    pub views: i64,
    pub user_id: UserId,
}

impl Post {
    /// Check if the given user owns this post
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Apply an edit to title and body, leaving id, owner and views untouched
    pub fn edit(&mut self, title: String, text: Option<String>) {
        self.title = title;
        self.text = text;
    }

    /// Record one more view
    pub fn record_view(&mut self) {
        self.views = self.views.saturating_add(1);
    }
}

/// A post that has not been stored yet; the repository assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub text: Option<String>,
    pub user_id: UserId,
}

impl NewPost {
    /// Create a new post draft, validating the title
    pub fn new(
        title: impl Into<String>,
        text: Option<String>,
        user_id: UserId,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            title,
            text,
            user_id,
        })
    }

    /// Turn the draft into a stored post with the given id
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            text: self.text,
            views: 0,
            user_id: self.user_id,
        }
    }
}

/// Validate a post title. Whitespace-only titles count as empty.
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "Title must not be empty".to_string(),
        ));
    }
    Ok(())
}
