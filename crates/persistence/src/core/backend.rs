//! Backend abstraction for database drivers.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::BackendError;

/// Identifies the type of database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// SQLite database (file-based or in-memory).
    Sqlite,
    /// PostgreSQL database.
    Postgres,
    /// Custom or unknown backend.
    Custom(&'static str),
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Sqlite => write!(f, "sqlite"),
            BackendKind::Postgres => write!(f, "postgres"),
            BackendKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// Lifecycle operations shared by all database backends.
#[async_trait]
pub trait Backend: Send + Sync + Debug {
    /// Returns the backend kind.
    fn kind(&self) -> BackendKind;

    /// Returns a short backend name for logs and health responses.
    fn name(&self) -> &'static str;

    /// Verifies that a connection can be acquired and a trivial query runs.
    async fn health_check(&self) -> Result<(), BackendError>;

    /// Creates tables and seeds categories. Safe to call more than once.
    async fn initialize(&self) -> Result<(), BackendError>;
}
