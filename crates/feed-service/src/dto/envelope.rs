//! Response envelope
//!
//! Every operation answers with the same four-field shape:
//!
//! ```json
//! { "status": "success", "message": "...", "data": [...], "details": null }
//! ```
//!
//! Services produce a [`Reply`] or a [`ServiceError`]; [`Envelope::from`]
//! is the only place the two are turned into that shape.

use serde::Serialize;

use crate::services::{ErrorKind, ServiceError, ServiceResult};

/// Envelope status field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Successful outcome of a service operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<T> {
    pub message: Option<String>,
    pub data: Option<Vec<T>>,
}

impl<T> Reply<T> {
    /// Outcome with a message and no payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }

    /// Outcome carrying only data
    pub fn data(data: Vec<T>) -> Self {
        Self {
            message: None,
            data: Some(data),
        }
    }

    /// Outcome with a message and a single object
    pub fn with_item(message: impl Into<String>, item: T) -> Self {
        Self {
            message: Some(message.into()),
            data: Some(vec![item]),
        }
    }
}

/// Uniform success/error wrapper
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: Option<String>,
    pub data: Option<Vec<T>>,
    pub details: Option<String>,
    /// Classification of the failure; not part of the serialized shape
    #[serde(skip)]
    pub kind: Option<ErrorKind>,
}

impl<T> Envelope<T> {
    /// Error envelope with a message and no payload
    pub fn error(message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            data: None,
            details,
            kind: None,
        }
    }
}

impl<T> From<Reply<T>> for Envelope<T> {
    fn from(reply: Reply<T>) -> Self {
        Self {
            status: Status::Success,
            message: reply.message,
            data: reply.data,
            details: None,
            kind: None,
        }
    }
}

impl<T> From<ServiceError> for Envelope<T> {
    fn from(err: ServiceError) -> Self {
        let details = err.details().map(str::to_string);
        Self {
            kind: Some(err.kind()),
            ..Self::error(err.to_string(), details)
        }
    }
}

impl<T> From<ServiceResult<Reply<T>>> for Envelope<T> {
    fn from(result: ServiceResult<Reply<T>>) -> Self {
        match result {
            Ok(reply) => reply.into(),
            Err(err) => err.into(),
        }
    }
}
