//! Reaction database model

use sqlx::FromRow;

/// Database model for post_reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: i64,
    pub post_id: i64,
    pub is_like: bool,
}
