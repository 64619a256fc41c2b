//! Domain errors for the Pomodoro Forest backend.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the in-memory selection primitives.
///
/// Both variants are caller errors. Nothing here is transient, so nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No data available: {0}")]
    NoDataAvailable(String),
}

/// Domain-level errors that can occur in the forest backend.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    #[error("Tree not found: {0}")]
    TreeNotFound(Uuid),

    #[error("Tree template not found: {0}")]
    TemplateNotFound(Uuid),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Phrase cache error: {0}")]
    CacheError(String),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::CacheError(err.to_string())
    }
}
