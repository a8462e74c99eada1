//! Error types for the trivia REST API.
//!
//! Every error is rendered as the JSON envelope
//!
//! ```json
//! {"success": false, "error": 404, "message": "resource not found"}
//! ```
//!
//! The message is fixed per status code. The detailed reason is logged and
//! never returned to the client.
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status |
//! |--------------|-------------|
//! | PageOutOfRange | 404 |
//! | NotFound | 422 |
//! | InvalidCategory | 400 |
//! | InvalidPage | 400 |
//! | MissingRequiredField | 422 |
//! | BackendError | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tracing::{error, warn};
use trivia_persistence::error::{BackendError, ResourceError, StorageError, ValidationError};

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Malformed request (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Resource or page not found (HTTP 404).
    NotFound {
        /// Error message.
        message: String,
    },

    /// Method not allowed on a known route (HTTP 405).
    MethodNotAllowed {
        /// The method that was attempted.
        method: String,
    },

    /// Well-formed request that cannot be processed (HTTP 422).
    UnprocessableEntity {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },

    /// Storage backend is unhealthy (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Shorthand for [`RestError::BadRequest`].
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest {
            message: message.into(),
        }
    }

    /// Shorthand for [`RestError::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        RestError::NotFound {
            message: message.into(),
        }
    }

    /// Shorthand for [`RestError::UnprocessableEntity`].
    pub fn unprocessable(message: impl Into<String>) -> Self {
        RestError::UnprocessableEntity {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RestError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Returns the fixed client-facing message for this error.
    pub fn public_message(&self) -> &'static str {
        match self {
            RestError::BadRequest { .. } => "bad request",
            RestError::NotFound { .. } => "resource not found",
            RestError::MethodNotAllowed { .. } => "method not allowed",
            RestError::UnprocessableEntity { .. } => "unprocessable",
            RestError::InternalError { .. } => "internal server error",
            RestError::ServiceUnavailable { .. } => "service unavailable",
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::NotFound { message } => write!(f, "Not found: {}", message),
            RestError::MethodNotAllowed { method } => write!(f, "Method {} not allowed", method),
            RestError::UnprocessableEntity { message } => {
                write!(f, "Unprocessable entity: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(error_body(status, self.public_message()))).into_response()
    }
}

/// Builds the JSON error envelope.
fn error_body(status: StatusCode, message: &str) -> serde_json::Value {
    json!({
        "success": false,
        "error": status.as_u16(),
        "message": message
    })
}

// Conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::PageOutOfRange { .. } => RestError::not_found(err.to_string()),
            ResourceError::NotFound { .. } => RestError::unprocessable(err.to_string()),
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidCategory { .. } | ValidationError::InvalidPage { .. } => {
                RestError::bad_request(err.to_string())
            }
            ValidationError::MissingRequiredField { .. } => {
                RestError::unprocessable(err.to_string())
            }
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RestError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RestError::unprocessable("x").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            RestError::ServiceUnavailable {
                message: "down".to_string()
            }
            .status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_error_body() {
        let body = error_body(StatusCode::NOT_FOUND, "resource not found");
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "resource not found");
    }

    #[test]
    fn test_page_out_of_range_maps_to_not_found() {
        let err: RestError = StorageError::from(ResourceError::PageOutOfRange {
            page: 100,
            total: 19,
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "resource not found");
    }

    #[test]
    fn test_missing_question_maps_to_unprocessable() {
        let err: RestError = StorageError::from(ResourceError::NotFound {
            kind: "question",
            id: 1000,
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.public_message(), "unprocessable");
    }

    #[test]
    fn test_invalid_category_maps_to_bad_request() {
        let err: RestError = StorageError::from(ValidationError::InvalidCategory {
            category: "999".to_string(),
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_backend_error_hides_details() {
        let err: RestError = StorageError::from(BackendError::Unavailable {
            backend_name: "sqlite".to_string(),
            message: "disk on fire".to_string(),
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "internal server error");
    }
}
