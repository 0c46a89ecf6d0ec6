//! Request DTOs for API endpoints
//!
//! Title emptiness is a service rule, checked after ownership on edit, so it
//! is not repeated here.

use serde::Deserialize;
use validator::Validate;

/// Publish a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(max = 300, message = "Title must be at most 300 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 40000, message = "Text must be at most 40000 characters"))]
    pub text: Option<String>,
}

/// Replace the title and body of a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(max = 300, message = "Title must be at most 300 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 40000, message = "Text must be at most 40000 characters"))]
    pub text: Option<String>,
}
