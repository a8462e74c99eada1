//! REST API test harness.
//!
//! Provides a test server wired to an in-memory SQLite backend that tests can
//! also query directly.

use std::sync::Arc;

use axum_test::TestServer;
use trivia_persistence::backends::sqlite::SqliteBackend;
use trivia_persistence::core::QuestionStorage;
use trivia_persistence::seed::seed_sample_questions;
use trivia_persistence::types::{NewQuestion, Question};
use trivia_rest::{AppState, ServerConfig, routing};

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_categories() {
///     let harness = TriviaTestHarness::seeded().await;
///     let response = harness.server.get("/categories").await;
///     response.assert_status_ok();
/// }
/// ```
pub struct TriviaTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend.
    pub backend: Arc<SqliteBackend>,
}

impl TriviaTestHarness {
    /// Creates a harness over an empty store (categories only).
    pub async fn empty() -> Self {
        Self::with_config(ServerConfig::for_testing()).await
    }

    /// Creates a harness over a store holding the sample questions.
    pub async fn seeded() -> Self {
        let harness = Self::empty().await;
        seed_sample_questions(harness.backend.as_ref())
            .await
            .expect("Failed to seed sample questions");
        harness
    }

    /// Creates a harness over an empty store with the given configuration.
    pub async fn with_config(config: ServerConfig) -> Self {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        backend.init_schema().expect("Failed to init schema");
        let backend = Arc::new(backend);

        let state = AppState::new(Arc::clone(&backend), config);
        let app = routing::create_routes(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, backend }
    }

    /// Inserts a question directly into the store.
    pub async fn insert(&self, question: NewQuestion) -> Question {
        self.backend
            .create(question)
            .await
            .expect("Failed to insert question")
    }
}
