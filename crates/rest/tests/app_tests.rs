//! Application stack tests.
//!
//! Exercises `create_app_with_config` with its middleware (CORS, body limit)
//! and a file-backed SQLite database.

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use serde_json::{Value, json};
use trivia_persistence::backends::sqlite::SqliteBackend;
use trivia_persistence::seed::seed_sample_questions;
use trivia_rest::{ServerConfig, create_app_with_config};

async fn open_backend(path: &std::path::Path) -> SqliteBackend {
    let backend = SqliteBackend::open(path).expect("Failed to open SQLite database");
    backend.init_schema().expect("Failed to init schema");
    backend
}

#[tokio::test]
async fn test_file_database_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trivia.db");

    {
        let backend = open_backend(&path).await;
        seed_sample_questions(&backend).await.unwrap();
        let server =
            TestServer::new(create_app_with_config(backend, ServerConfig::for_testing())).unwrap();

        let response = server
            .post("/questions")
            .json(&json!({
                "question": "What is the capital of Peru?",
                "answer": "Lima",
                "category": "3",
                "difficulty": 2
            }))
            .await;
        response.assert_status_ok();
    }

    let backend = open_backend(&path).await;
    let server =
        TestServer::new(create_app_with_config(backend, ServerConfig::for_testing())).unwrap();

    let response = server.get("/questions?page=2").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["total_questions"], 20);
    assert_eq!(body["questions"][9]["answer"], "Lima");
}

#[tokio::test]
async fn test_cors_headers_when_enabled() {
    let backend = SqliteBackend::in_memory().unwrap();
    backend.init_schema().unwrap();

    let config = ServerConfig {
        enable_cors: true,
        ..ServerConfig::for_testing()
    };
    let server = TestServer::new(create_app_with_config(backend, config)).unwrap();

    let response = server
        .get("/categories")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        HeaderValue::from_static("*")
    );
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let backend = SqliteBackend::in_memory().unwrap();
    backend.init_schema().unwrap();

    let config = ServerConfig {
        max_body_size: 64,
        ..ServerConfig::for_testing()
    };
    let server = TestServer::new(create_app_with_config(backend, config)).unwrap();

    let response = server
        .post("/questions")
        .json(&json!({
            "question": "x".repeat(256),
            "answer": "y",
            "category": "1",
            "difficulty": 1
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["success"], false);
}
