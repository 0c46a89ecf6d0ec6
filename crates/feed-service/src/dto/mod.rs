//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - The response envelope every operation is rendered into

pub mod envelope;
pub mod requests;
pub mod responses;

pub use envelope::{Envelope, Reply, Status};
pub use requests::{CreatePostRequest, UpdatePostRequest};
pub use responses::{HealthResponse, PostResponse, ReactionSummaryResponse};
