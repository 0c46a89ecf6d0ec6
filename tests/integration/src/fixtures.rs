//! Test fixtures
//!
//! Request bodies and the deserialized shape of response envelopes.

use serde::{Deserialize, Serialize};

/// Publish/edit request
#[derive(Debug, Serialize)]
pub struct PostRequest {
    pub title: String,
    pub text: Option<String>,
}

impl PostRequest {
    pub fn new(title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            text: Some(text.to_string()),
        }
    }

    pub fn title_only(title: &str) -> Self {
        Self {
            title: title.to_string(),
            text: None,
        }
    }
}

/// Response envelope
#[derive(Debug, Deserialize)]
pub struct EnvelopeBody<T> {
    pub status: String,
    pub message: Option<String>,
    pub data: Option<Vec<T>>,
    pub details: Option<String>,
}

impl<T> EnvelopeBody<T> {
    /// The single item of `data`
    pub fn item(self) -> T {
        let mut data = self.data.expect("envelope has no data");
        assert_eq!(data.len(), 1, "expected exactly one item");
        data.remove(0)
    }
}

/// Post as returned in `data`
#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub id: i64,
    pub title: String,
    pub text: Option<String>,
    pub views: i64,
    pub user_id: i64,
}

/// Reaction counts as returned in `data`
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct SummaryBody {
    pub total_reactions: u64,
    pub likes: u64,
    pub dislikes: u64,
}

impl SummaryBody {
    pub fn counts(&self) -> (u64, u64, u64) {
        (self.total_reactions, self.likes, self.dislikes)
    }
}

/// Health response
#[derive(Debug, Deserialize)]
pub struct HealthBody {
    pub status: String,
}
