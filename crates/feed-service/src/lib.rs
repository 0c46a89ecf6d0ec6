//! # feed-service
//!
//! Application layer containing the post and reaction services, the response
//! envelope, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CreatePostRequest, Envelope, HealthResponse, PostResponse, ReactionSummaryResponse, Reply,
    Status, UpdatePostRequest,
};
pub use services::{
    ErrorKind, PostLocks, PostService, ReactionLocks, ReactionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
