//! Post database model

use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub title: String,
    pub text: Option<String>,
    pub views: i64,
    pub user_id: i64,
}
