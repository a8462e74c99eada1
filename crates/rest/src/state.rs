//! Application state for the trivia REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the storage backend and the server configuration.

use std::sync::Arc;

use trivia_persistence::core::TriviaStorage;
use trivia_persistence::types::PageRequest;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`TriviaStorage`])
///
/// # Example
///
/// ```rust,ignore
/// use trivia_rest::{AppState, ServerConfig};
/// use trivia_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let state = AppState::new(Arc::new(backend), ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: TriviaStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a clone of the storage Arc.
    pub fn storage_arc(&self) -> Arc<S> {
        Arc::clone(&self.storage)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the number of questions per page.
    pub fn page_size(&self) -> u32 {
        self.config.page_size
    }

    /// Returns the request for the first page at the configured page size.
    pub fn first_page(&self) -> PageRequest {
        PageRequest::default().with_page_size(self.page_size())
    }
}
