//! Path parameter extractors
//!
//! Ids arrive as path segments and are parsed into typed ids, so a
//! malformed id is a 400 rendered as an error envelope.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use feed_core::{PostId, UserId};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Path parameters whose rejection is an [`ApiError`]
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(IdPath(inner))
    }
}

/// Path parameters with post_id
#[derive(Debug, serde::Deserialize)]
pub struct PostPath {
    pub post_id: String,
}

impl PostPath {
    /// Parse post_id
    pub fn post_id(&self) -> Result<PostId, ApiError> {
        self.post_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserPath {
    pub user_id: String,
}

impl UserPath {
    /// Parse user_id
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}
