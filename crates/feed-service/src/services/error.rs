//! Service layer error types
//!
//! Every operation failure is one of five kinds. The `Display` text of an
//! error is the message shown to the caller in the error envelope.

use feed_core::DomainError;
use std::fmt;

/// Classification of service failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input, e.g. an empty title
    Validation,
    /// Referenced post or user does not exist
    NotFound,
    /// Acting user does not own the post
    Authorization,
    /// Operation is invalid in the current state
    Conflict,
    /// Storage failed; the only unexpected kind
    Persistence,
}

impl ErrorKind {
    /// HTTP status code for this kind
    pub fn status_code(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::NotFound => 404,
            Self::Authorization => 403,
            Self::Conflict => 409,
            Self::Persistence => 500,
        }
    }

    /// Error code for logs and API responses
    pub fn code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Authorization => "FORBIDDEN",
            Self::Conflict => "CONFLICT",
            Self::Persistence => "PERSISTENCE_ERROR",
        }
    }
}

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Storage-level conflict on a reaction row, retried once by the service
    Domain(DomainError),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Acting user is not allowed to perform the operation
    PermissionDenied { message: String },

    /// Validation error
    Validation(String),

    /// Operation conflicts with the current state
    Conflict(String),

    /// Storage failure. `context` names the operation, `detail` is the raw cause.
    Persistence {
        context: Option<String>,
        detail: String,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} #{id} does not exist"),
            Self::PermissionDenied { message } | Self::Validation(message) | Self::Conflict(message) => {
                f.write_str(message)
            }
            Self::Persistence {
                context: Some(context),
                ..
            } => write!(f, "An error occurred while {context}"),
            Self::Persistence { context: None, .. } => f.write_str("An unexpected error occurred"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a persistence error without operation context
    pub fn persistence(detail: impl Into<String>) -> Self {
        Self::Persistence {
            context: None,
            detail: detail.into(),
        }
    }

    /// Name the operation a persistence error happened in.
    /// Other kinds pass through, as does an error that already has a context.
    #[must_use]
    pub fn with_context(self, context: impl Into<String>) -> Self {
        match self {
            Self::Persistence {
                context: None,
                detail,
            } => Self::Persistence {
                context: Some(context.into()),
                detail,
            },
            other => other,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    ErrorKind::NotFound
                } else if e.is_validation() {
                    ErrorKind::Validation
                } else if e.is_conflict() {
                    ErrorKind::Conflict
                } else {
                    ErrorKind::Persistence
                }
            }
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::PermissionDenied { .. } => ErrorKind::Authorization,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Persistence { .. } => ErrorKind::Persistence,
        }
    }

    /// Raw storage error text, only present for persistence failures
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Persistence { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Whether a concurrent writer changed the reaction row under us
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Domain(DomainError::ReactionAlreadyExists | DomainError::ReactionNotFound)
        )
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::PostNotFound(id) => Self::not_found("Post", id),
            DomainError::UserNotFound(id) => Self::not_found("User", id),
            DomainError::ValidationError(msg) => Self::Validation(msg),
            DomainError::DatabaseError(detail) => Self::persistence(detail),
            e @ (DomainError::ReactionAlreadyExists | DomainError::ReactionNotFound) => {
                Self::Domain(e)
            }
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use feed_core::{PostId, UserId};

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::not_found("Post", PostId::new(7));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "Post #7 does not exist");
        assert!(err.details().is_none());
    }

    #[test]
    fn test_permission_denied_error() {
        let err = ServiceError::permission_denied("User #3 is not allowed to edit post #1");
        assert_eq!(err.kind(), ErrorKind::Authorization);
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.to_string(), "User #3 is not allowed to edit post #1");
    }

    #[test]
    fn test_persistence_context() {
        let err = ServiceError::persistence("connection refused")
            .with_context("deleting post #4 by user #1")
            .with_context("ignored");

        assert_eq!(err.kind(), ErrorKind::Persistence);
        assert_eq!(
            err.to_string(),
            "An error occurred while deleting post #4 by user #1"
        );
        assert_eq!(err.details(), Some("connection refused"));
    }

    #[test]
    fn test_context_ignored_for_expected_errors() {
        let err = ServiceError::validation("Title must not be empty").with_context("editing");
        assert_eq!(err.to_string(), "Title must not be empty");
        assert!(err.details().is_none());
    }

    #[test]
    fn test_from_domain_error() {
        let err = ServiceError::from(DomainError::PostNotFound(PostId::new(2)));
        assert_eq!(err.to_string(), "Post #2 does not exist");

        let err = ServiceError::from(DomainError::UserNotFound(UserId::new(5)));
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = ServiceError::from(DomainError::DatabaseError("boom".into()));
        assert_eq!(err.kind(), ErrorKind::Persistence);
        assert_eq!(err.details(), Some("boom"));

        let err = ServiceError::from(DomainError::ReactionAlreadyExists);
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(err.is_retryable());
        assert!(!ServiceError::conflict("x").is_retryable());
    }
}
