//! Search handler.
//!
//! Implements `POST [base]/search`: a case-insensitive substring match on the
//! question text.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::debug;
use trivia_persistence::core::TriviaStorage;

use crate::error::{RestError, RestResult};
use crate::extractors::JsonBody;
use crate::responses::SearchResponse;
use crate::state::AppState;

/// Payload of `POST /search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Substring to look for.
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Handler for searching questions.
///
/// # HTTP Request
///
/// `POST [base]/search`
///
/// ```json
/// {"searchTerm": "title"}
/// ```
///
/// # Response
///
/// - `200 OK` - Matching questions, ordered by id
/// - `400 Bad Request` - `searchTerm` is missing or not a string
/// - `404 Not Found` - Nothing matched
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(request): JsonBody<SearchRequest>,
) -> RestResult<Json<SearchResponse>>
where
    S: TriviaStorage,
{
    debug!(term = %request.search_term, "Processing search request");

    let questions = state.storage().search(&request.search_term).await?;

    if questions.is_empty() {
        return Err(RestError::not_found(format!(
            "No questions match '{}'",
            request.search_term
        )));
    }

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len() as u64,
        questions,
        current_category: None,
    }))
}
