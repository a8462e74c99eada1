//! # trivia-rest - HTTP JSON API for trivia questions
//!
//! This crate exposes a question store over HTTP: paginated listing, creation,
//! deletion, per-category listing, free-text search and a quiz endpoint that
//! draws one question the player has not seen yet.
//!
//! ## Backend Support
//!
//! Storage backends are configured through feature flags:
//!
//! - `sqlite` - SQLite backend (default)
//! - `postgres` - PostgreSQL backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trivia_rest::{create_app, ServerConfig};
//! use trivia_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("trivia.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Method | URL Pattern | Description |
//! |--------|-------------|-------------|
//! | GET | `/questions?page=N` | One page of questions plus all categories |
//! | POST | `/questions` | Create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | GET | `/categories` | All categories |
//! | GET | `/categories/{id}/questions` | Questions of one category |
//! | POST | `/search` | Case-insensitive search on question text |
//! | POST | `/quizzes` | Next random quiz question |
//! | GET | `/health` | Health check |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"success": false, "error": <status>, "message": <text>}`:
//!
//! | HTTP Status | Message |
//! |-------------|---------|
//! | 400 | bad request |
//! | 404 | resource not found |
//! | 405 | method not allowed |
//! | 422 | unprocessable |
//! | 500 | internal server error |
//! | 503 | service unavailable |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and the JSON error envelope
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - JSON body and pagination extractors
//! - [`responses`] - Typed response bodies
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use trivia_persistence::core::{Backend, TriviaStorage};

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: TriviaStorage + Backend + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust,ignore
/// use trivia_rest::{create_app_with_config, ServerConfig};
/// use trivia_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// backend.init_schema()?;
/// let config = ServerConfig {
///     port: 3000,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: TriviaStorage + Backend + 'static,
{
    info!(
        backend = storage.backend_name(),
        page_size = config.page_size,
        "Creating trivia API"
    );

    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level` when set. Call once at startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "trivia_rest={level},trivia_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
