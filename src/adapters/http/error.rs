//! JSON error responses.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::errors::{DomainError, SelectionError};

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// An error leaving the API, rendered as `{error, code}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UserNotFound(_) => Self::new(StatusCode::NOT_FOUND, "USER_NOT_FOUND", err.to_string()),
            DomainError::TreeNotFound(_) => Self::new(StatusCode::NOT_FOUND, "TREE_NOT_FOUND", err.to_string()),
            DomainError::TemplateNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "TEMPLATE_NOT_FOUND", err.to_string())
            }
            DomainError::UserAlreadyExists(_) => {
                Self::new(StatusCode::BAD_REQUEST, "ALREADY_EXISTS", err.to_string())
            }
            DomainError::PermissionDenied(_) => Self::new(StatusCode::FORBIDDEN, "FORBIDDEN", err.to_string()),
            DomainError::ValidationFailed(_) => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", err.to_string())
            }
            DomainError::Selection(SelectionError::InvalidArgument(_)) => {
                Self::new(StatusCode::BAD_REQUEST, "INVALID_ARGUMENT", err.to_string())
            }
            DomainError::Selection(SelectionError::NoDataAvailable(_)) => {
                Self::new(StatusCode::NOT_FOUND, "NO_DATA", err.to_string())
            }
            DomainError::DatabaseError(_)
            | DomainError::SerializationError(_)
            | DomainError::CacheError(_) => {
                error!(error = %err, "request failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error",
                )
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::bad_request(format!("Invalid JSON body: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
            code: self.code.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_domain_error_status_mapping() {
        let cases = [
            (DomainError::TreeNotFound(Uuid::nil()), StatusCode::NOT_FOUND),
            (DomainError::PermissionDenied("ana".into()), StatusCode::FORBIDDEN),
            (DomainError::ValidationFailed("bad".into()), StatusCode::BAD_REQUEST),
            (DomainError::DatabaseError("locked".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                SelectionError::InvalidArgument("empty".into()).into(),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = ApiError::from(DomainError::DatabaseError("disk I/O error at /secret".into()));
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(err.message, "Internal server error");
    }
}
