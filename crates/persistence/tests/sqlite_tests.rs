//! SQLite backend integration tests.
//!
//! These tests exercise the storage traits against an in-memory database
//! seeded with the sample question set.

use trivia_persistence::backends::sqlite::SqliteBackend;
use trivia_persistence::core::{CategoryStorage, QuestionStorage};
use trivia_persistence::error::{ResourceError, StorageError, ValidationError};
use trivia_persistence::seed::{DEFAULT_CATEGORIES, seed_sample_questions};
use trivia_persistence::types::{NewQuestion, PageRequest, QUESTIONS_PER_PAGE};

fn create_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

async fn create_seeded_backend() -> SqliteBackend {
    let backend = create_backend();
    seed_sample_questions(&backend)
        .await
        .expect("Failed to seed sample questions");
    backend
}

fn pop_question() -> NewQuestion {
    NewQuestion::new("will this test pass ?", "I hope it does.", "pop", 44)
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_first_page() {
    let backend = create_seeded_backend().await;

    let page = backend.list(PageRequest::default()).await.unwrap();
    assert_eq!(page.len(), QUESTIONS_PER_PAGE as usize);
    assert_eq!(page.total, 19);
    assert_eq!(page.page, 1);

    let ids: Vec<i64> = page.items.iter().map(|q| q.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted, "Questions should be ordered by id");
}

#[tokio::test]
async fn test_list_last_partial_page() {
    let backend = create_seeded_backend().await;

    let page = backend.list(PageRequest::new(2).unwrap()).await.unwrap();
    assert_eq!(page.len(), 9);
}

#[tokio::test]
async fn test_list_page_beyond_range() {
    let backend = create_seeded_backend().await;

    let result = backend.list(PageRequest::new(100).unwrap()).await;
    match result {
        Err(StorageError::Resource(ResourceError::PageOutOfRange { page, total })) => {
            assert_eq!(page, 100);
            assert_eq!(total, 19);
        }
        other => panic!("Expected PageOutOfRange, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_empty_store_is_out_of_range() {
    let backend = create_backend();
    let result = backend.list(PageRequest::default()).await;
    assert!(matches!(
        result,
        Err(StorageError::Resource(ResourceError::PageOutOfRange { .. }))
    ));
}

#[tokio::test]
async fn test_list_custom_page_size() {
    let backend = create_seeded_backend().await;
    let page = backend
        .list(PageRequest::new(4).unwrap().with_page_size(5))
        .await
        .unwrap();
    assert_eq!(page.len(), 4);
}

#[tokio::test]
async fn test_list_page_size_capped() {
    let backend = create_seeded_backend().await;
    let page = backend
        .list(PageRequest::default().with_page_size(50))
        .await
        .unwrap();
    assert_eq!(page.len(), QUESTIONS_PER_PAGE as usize);
    assert_eq!(page.total, 19);

    let oversized = PageRequest {
        page: 1,
        page_size: 50,
    };
    assert_eq!(backend.list(oversized).await.unwrap().len(), 10);
}

// ============================================================================
// Create / Read / Delete Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_read() {
    let backend = create_backend();

    let created = backend.create(pop_question()).await.unwrap();
    let read = backend.read(created.id).await.unwrap().expect("Question should exist");

    assert_eq!(read, created);
    assert_eq!(read.category, "pop");
    assert_eq!(read.difficulty, 44);
}

#[tokio::test]
async fn test_delete_removes_question() {
    let backend = create_seeded_backend().await;

    let created = backend.create(pop_question()).await.unwrap();
    assert_eq!(backend.count().await.unwrap(), 20);

    backend.delete(created.id).await.unwrap();

    assert!(backend.read(created.id).await.unwrap().is_none());
    assert!(!backend.exists(created.id).await.unwrap());
    assert_eq!(backend.count().await.unwrap(), 19);
}

#[tokio::test]
async fn test_delete_nonexistent_fails() {
    let backend = create_seeded_backend().await;

    let result = backend.delete(1000).await;
    match result {
        Err(StorageError::Resource(ResourceError::NotFound { id, .. })) => assert_eq!(id, 1000),
        other => panic!("Expected NotFound error, got {:?}", other),
    }

    // The listing is untouched
    assert_eq!(backend.count().await.unwrap(), 19);
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let backend = create_backend();

    let first = backend.create(pop_question()).await.unwrap();
    backend.delete(first.id).await.unwrap();
    let second = backend.create(pop_question()).await.unwrap();

    assert!(second.id > first.id);
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_finds_substring() {
    let backend = create_seeded_backend().await;

    let results = backend.search("title").await.unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|q| q.question.to_lowercase().contains("title")));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let backend = create_seeded_backend().await;

    let lower = backend.search("world cup").await.unwrap();
    let upper = backend.search("WORLD CUP").await.unwrap();
    assert_eq!(lower.len(), 2);
    assert_eq!(lower, upper);
}

#[tokio::test]
async fn test_search_no_matches() {
    let backend = create_seeded_backend().await;
    let results = backend.search("not available444").await.unwrap();
    assert!(results.is_empty());
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_list_all_categories() {
    let backend = create_backend();

    let categories = backend.list_all().await.unwrap();
    assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
    assert_eq!(categories[0].kind, "Science");
    assert_eq!(categories[5].kind, "Sports");
}

#[tokio::test]
async fn test_filter_by_category() {
    let backend = create_seeded_backend().await;

    let art = backend.filter_by_category(2).await.unwrap();
    assert_eq!(art.len(), 4);
    assert!(art.iter().all(|q| q.category == "2"));
}

#[tokio::test]
async fn test_filter_by_unknown_category() {
    let backend = create_seeded_backend().await;

    let result = backend.filter_by_category(999).await;
    assert!(matches!(
        result,
        Err(StorageError::Validation(ValidationError::InvalidCategory { .. }))
    ));
}

// ============================================================================
// Seed / File Tests
// ============================================================================

#[tokio::test]
async fn test_seed_only_into_empty_store() {
    let backend = create_seeded_backend().await;

    let inserted = seed_sample_questions(&backend).await.unwrap();
    assert_eq!(inserted, 0);
    assert_eq!(backend.count().await.unwrap(), 19);
}

#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trivia.db");

    let id = {
        let backend = SqliteBackend::open(&path).unwrap();
        backend.init_schema().unwrap();
        backend.create(pop_question()).await.unwrap().id
    };

    let backend = SqliteBackend::open(&path).unwrap();
    backend.init_schema().unwrap();
    let read = backend.read(id).await.unwrap();
    assert!(read.is_some());
    assert_eq!(backend.list_all().await.unwrap().len(), DEFAULT_CATEGORIES.len());
}
