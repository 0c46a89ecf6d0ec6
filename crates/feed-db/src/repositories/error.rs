//! Error handling utilities for repositories

use feed_core::error::DomainError;
use feed_core::value_objects::{PostId, UserId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign key violation on the owner column to "user not found"
pub fn map_owner_violation(e: SqlxError, owner: UserId) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return DomainError::UserNotFound(owner);
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a failed reaction insert: duplicate pair, or a missing user or post
pub fn map_reaction_insert_error(e: SqlxError, user: UserId, post: PostId) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::ReactionAlreadyExists;
        }
        if db_err.is_foreign_key_violation() {
            return match db_err.constraint() {
                Some(name) if name.contains("post_id") => DomainError::PostNotFound(post),
                _ => DomainError::UserNotFound(user),
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}
