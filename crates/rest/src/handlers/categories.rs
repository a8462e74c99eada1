//! Category handlers.
//!
//! - `GET [base]/categories` - List all categories
//! - `GET [base]/categories/{id}/questions` - List the questions of a category

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;
use trivia_persistence::core::TriviaStorage;

use crate::error::{RestError, RestResult};
use crate::responses::{CategoriesResponse, CategoryQuestionsResponse, category_map};
use crate::state::AppState;

/// Handler for listing categories.
///
/// # HTTP Request
///
/// `GET [base]/categories`
///
/// # Response
///
/// - `200 OK` - `{"success": true, "categories": {"1": "Science", ...}}`
pub async fn list_categories_handler<S>(
    State(state): State<AppState<S>>,
) -> RestResult<Json<CategoriesResponse>>
where
    S: TriviaStorage,
{
    debug!("Processing list categories request");

    let categories = state.storage().list_all().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// Handler for listing the questions of one category.
///
/// The listing is not paginated.
///
/// # HTTP Request
///
/// `GET [base]/categories/{id}/questions`
///
/// # Response
///
/// - `200 OK` - The questions and the category type as `current_category`
/// - `400 Bad Request` - The id is not an integer or names no category
pub async fn category_questions_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<CategoryQuestionsResponse>>
where
    S: TriviaStorage,
{
    debug!(category = %id, "Processing category questions request");

    let id: i64 = id
        .parse()
        .map_err(|_| RestError::bad_request(format!("Invalid category id: {}", id)))?;

    let category = state
        .storage()
        .get(id)
        .await?
        .ok_or_else(|| RestError::bad_request(format!("Unknown category: {}", id)))?;

    let questions = state.storage().filter_by_category(category.id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len() as u64,
        questions,
        current_category: category.kind,
    }))
}
