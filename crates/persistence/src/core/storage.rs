//! Question and category storage traits.
//!
//! These traits replace direct model access in request handlers: a handler
//! receives some `S: TriviaStorage` through the application state and never
//! touches a connection itself.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Category, CategoryFilter, NewQuestion, Page, PageRequest, Question};

/// Storage operations for trivia questions.
///
/// # Example
///
/// ```ignore
/// use trivia_persistence::core::QuestionStorage;
/// use trivia_persistence::types::{NewQuestion, PageRequest};
///
/// async fn example<S: QuestionStorage>(storage: &S) -> StorageResult<()> {
///     let stored = storage
///         .create(NewQuestion::new("What is the largest lake in Africa?", "Lake Victoria", "3", 2))
///         .await?;
///
///     let page = storage.list(PageRequest::default()).await?;
///     assert!(page.items.iter().any(|q| q.id == stored.id));
///
///     storage.delete(stored.id).await?;
///     assert!(storage.read(stored.id).await?.is_none());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait QuestionStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns one page of questions ordered by id.
    ///
    /// # Errors
    ///
    /// * `ResourceError::PageOutOfRange` - If the page holds no questions
    async fn list(&self, page: PageRequest) -> StorageResult<Page<Question>>;

    /// Stores a new question and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// * `ValidationError::MissingRequiredField` - If a text field is blank
    async fn create(&self, question: NewQuestion) -> StorageResult<Question>;

    /// Reads a question by id.
    async fn read(&self, id: i64) -> StorageResult<Option<Question>>;

    /// Permanently deletes a question.
    ///
    /// # Errors
    ///
    /// * `ResourceError::NotFound` - If no question has this id
    async fn delete(&self, id: i64) -> StorageResult<()>;

    /// Returns the total number of questions.
    async fn count(&self) -> StorageResult<u64>;

    /// Returns every question whose text contains `term`, ignoring case.
    ///
    /// LIKE wildcards in `term` match literally. An empty result is not an
    /// error at this layer.
    async fn search(&self, term: &str) -> StorageResult<Vec<Question>>;

    /// Returns every question in a category, ordered by id.
    ///
    /// # Errors
    ///
    /// * `ValidationError::InvalidCategory` - If the category does not exist
    async fn filter_by_category(&self, category_id: i64) -> StorageResult<Vec<Question>>;

    /// Returns the questions matching `filter` whose ids are not in `exclude`.
    async fn quiz_pool(
        &self,
        filter: CategoryFilter,
        exclude: &[i64],
    ) -> StorageResult<Vec<Question>>;

    /// Checks whether a question exists.
    async fn exists(&self, id: i64) -> StorageResult<bool> {
        Ok(self.read(id).await?.is_some())
    }
}

/// Read-only access to question categories.
#[async_trait]
pub trait CategoryStorage: Send + Sync {
    /// Returns every category ordered by id.
    async fn list_all(&self) -> StorageResult<Vec<Category>>;

    /// Looks up a category by id.
    async fn get(&self, id: i64) -> StorageResult<Option<Category>>;
}

/// Everything the HTTP layer needs from a backend.
pub trait TriviaStorage: QuestionStorage + CategoryStorage {}

impl<T> TriviaStorage for T where T: QuestionStorage + CategoryStorage {}
