//! Server configuration for the trivia API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TRIVIA_SERVER_PORT` | 8080 | Server port |
//! | `TRIVIA_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `TRIVIA_LOG_LEVEL` | info | Log level |
//! | `TRIVIA_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `TRIVIA_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `TRIVIA_ENABLE_CORS` | true | Enable CORS |
//! | `TRIVIA_CORS_ORIGINS` | * | Allowed origins |
//! | `TRIVIA_CORS_METHODS` | GET,POST,PATCH,DELETE,OPTIONS | Allowed methods |
//! | `TRIVIA_CORS_HEADERS` | Content-Type,Authorization | Allowed headers |
//! | `TRIVIA_DATABASE_URL` | trivia.db | Database path or connection string |
//! | `TRIVIA_STORAGE_BACKEND` | sqlite | Storage backend (sqlite, postgres) |
//! | `TRIVIA_PAGE_SIZE` | 10 | Questions per page |
//! | `TRIVIA_SEED_SAMPLE_DATA` | false | Insert sample questions into an empty store |
//!
//! # Example
//!
//! ```rust
//! use trivia_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use clap::Parser;
use trivia_persistence::types::QUESTIONS_PER_PAGE;

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackendMode {
    /// SQLite file or in-memory database.
    #[default]
    Sqlite,
    /// PostgreSQL server.
    Postgres,
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendMode::Sqlite => write!(f, "sqlite"),
            StorageBackendMode::Postgres => write!(f, "postgres"),
        }
    }
}

/// Error returned when a storage backend name is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("unknown storage backend '{0}' (expected 'sqlite' or 'postgres')")]
pub struct UnknownBackendError(String);

impl FromStr for StorageBackendMode {
    type Err = UnknownBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackendMode::Sqlite),
            "postgres" | "postgresql" => Ok(StorageBackendMode::Postgres),
            other => Err(UnknownBackendError(other.to_string())),
        }
    }
}

/// Server configuration for the trivia API.
///
/// Constructed from command line arguments and environment variables using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "trivia")]
#[command(about = "Trivia question API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "TRIVIA_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "TRIVIA_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "TRIVIA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "TRIVIA_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "TRIVIA_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "TRIVIA_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "TRIVIA_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "TRIVIA_CORS_METHODS",
        default_value = "GET,POST,PATCH,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "TRIVIA_CORS_HEADERS",
        default_value = "Content-Type,Authorization"
    )]
    pub cors_headers: String,

    /// Database path (SQLite) or connection string (PostgreSQL).
    #[arg(long, env = "TRIVIA_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Storage backend (sqlite, postgres).
    #[arg(long, env = "TRIVIA_STORAGE_BACKEND", default_value = "sqlite")]
    pub storage_backend: String,

    /// Number of questions per page.
    #[arg(long, env = "TRIVIA_PAGE_SIZE", default_value = "10")]
    pub page_size: u32,

    /// Insert the sample question set when the store is empty.
    #[arg(long, env = "TRIVIA_SEED_SAMPLE_DATA", default_value = "false")]
    pub seed_sample_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PATCH,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization".to_string(),
            database_url: None,
            storage_backend: "sqlite".to_string(),
            page_size: QUESTIONS_PER_PAGE,
            seed_sample_data: false,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured storage backend.
    pub fn storage_backend_mode(&self) -> Result<StorageBackendMode, UnknownBackendError> {
        self.storage_backend.parse()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.page_size == 0 || self.page_size > QUESTIONS_PER_PAGE {
            errors.push(format!(
                "Page size must be between 1 and {}",
                QUESTIONS_PER_PAGE
            ));
        }

        if let Err(e) = self.storage_backend_mode() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0 and disables CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            ..Default::default()
        }
    }
}
