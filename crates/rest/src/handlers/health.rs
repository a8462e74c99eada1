//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};
use trivia_persistence::core::{Backend, TriviaStorage};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Runs the backend's health check (a trivial query against the pool).
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Server is healthy
/// - `503 Service Unavailable` - The storage backend is unreachable
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: TriviaStorage + Backend,
{
    debug!("Processing health check request");

    let backend_name = Backend::name(state.storage());

    if let Err(e) = state.storage().health_check().await {
        warn!(backend = backend_name, error = %e, "Health check failed");
        return Err(RestError::ServiceUnavailable {
            message: e.to_string(),
        });
    }

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": backend_name,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}
