//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use feed_core::entities::{Post, ReactionSummary};
use serde::Serialize;

// ============================================================================
// Post Responses
// ============================================================================

/// Post as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub text: Option<String>,
    pub views: i64,
    pub user_id: i64,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.into_inner(),
            title: post.title.clone(),
            text: post.text.clone(),
            views: post.views,
            user_id: post.user_id.into_inner(),
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into_inner(),
            title: post.title,
            text: post.text,
            views: post.views,
            user_id: post.user_id.into_inner(),
        }
    }
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Aggregated reaction counts of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReactionSummaryResponse {
    pub total_reactions: u64,
    pub likes: u64,
    pub dislikes: u64,
}

impl From<ReactionSummary> for ReactionSummaryResponse {
    fn from(summary: ReactionSummary) -> Self {
        Self {
            total_reactions: summary.total_reactions,
            likes: summary.likes,
            dislikes: summary.dislikes,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}
