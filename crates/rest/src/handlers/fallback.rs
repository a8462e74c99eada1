//! Fallback handlers for unmatched requests.

use axum::http::{Method, Uri};

use crate::error::RestError;

/// Renders the 404 envelope for unknown routes.
pub async fn not_found_handler(uri: Uri) -> RestError {
    RestError::not_found(format!("No route for {}", uri.path()))
}

/// Renders the 405 envelope for a known route called with the wrong method.
pub async fn method_not_allowed_handler(method: Method) -> RestError {
    RestError::MethodNotAllowed {
        method: method.to_string(),
    }
}
