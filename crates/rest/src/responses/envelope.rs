//! Typed response bodies.

use std::collections::BTreeMap;

use serde::Serialize;
use trivia_persistence::types::{Category, Question};

/// Categories rendered as a JSON object of `"<id>": "<type>"`.
pub type CategoryMap = BTreeMap<String, String>;

/// Builds the `{"<id>": "<type>"}` object from a category list.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id.to_string(), category.kind))
        .collect()
}

/// Body of `GET /questions`.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    /// Always true.
    pub success: bool,
    /// Questions on the requested page.
    pub questions: Vec<Question>,
    /// Total number of questions in the store.
    pub total_questions: u64,
    /// All categories.
    pub categories: CategoryMap,
    /// Always null for the unfiltered listing.
    pub current_category: Option<String>,
}

/// Body of `POST /questions`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// Always true.
    pub success: bool,
    /// Id of the new question.
    pub created: i64,
}

/// Body of `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    /// Always true.
    pub success: bool,
    /// Id of the deleted question.
    pub deleted: i64,
    /// First page of the remaining questions.
    pub questions: Vec<Question>,
    /// Number of questions left.
    pub total_questions: u64,
}

/// Body of `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    /// Always true.
    pub success: bool,
    /// All categories.
    pub categories: CategoryMap,
}

/// Body of `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    /// Always true.
    pub success: bool,
    /// Questions in the category.
    pub questions: Vec<Question>,
    /// Number of questions in the category.
    pub total_questions: u64,
    /// Type of the selected category.
    pub current_category: String,
}

/// Body of `POST /search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Always true.
    pub success: bool,
    /// Matching questions.
    pub questions: Vec<Question>,
    /// Number of matches.
    pub total_questions: u64,
    /// Always null for searches.
    pub current_category: Option<String>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    /// Always true.
    pub success: bool,
    /// The next question, or null once the pool is exhausted.
    pub question: Option<Question>,
}
