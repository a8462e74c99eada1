//! Quiz handler.
//!
//! Implements `POST [base]/quizzes`: returns one random question from the
//! selected category that the player has not been asked yet.

use axum::{Json, extract::State};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use tracing::debug;
use trivia_persistence::core::{TriviaStorage, next_question};
use trivia_persistence::types::CategoryFilter;

use crate::error::{RestError, RestResult};
use crate::extractors::JsonBody;
use crate::responses::QuizResponse;
use crate::state::AppState;

/// Payload of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Selected category. Missing or null means all categories.
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    /// Ids of the questions already asked.
    pub previous_questions: Vec<i64>,
}

/// Category selection as sent by quiz clients.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    /// Category id. `0` means all categories.
    #[serde(default)]
    pub id: Option<CategoryRef>,
    /// Category type, informational only.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// A category id sent either as a JSON integer or as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    /// `{"id": 2}`
    Number(i64),
    /// `{"id": "2"}`
    Text(String),
}

impl CategoryRef {
    /// Returns the numeric id.
    pub fn to_id(&self) -> RestResult<i64> {
        match self {
            CategoryRef::Number(id) => Ok(*id),
            CategoryRef::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| RestError::bad_request(format!("Invalid category id: {}", text))),
        }
    }
}

impl QuizRequest {
    /// Returns the category filter for this request.
    pub fn category_filter(&self) -> RestResult<CategoryFilter> {
        let id = match self.quiz_category.as_ref().and_then(|c| c.id.as_ref()) {
            Some(category) => category.to_id()?,
            None => 0,
        };
        Ok(CategoryFilter::from_id(id))
    }
}

/// Handler for drawing the next quiz question.
///
/// # HTTP Request
///
/// `POST [base]/quizzes`
///
/// ```json
/// {"quiz_category": {"id": "2", "type": "Art"}, "previous_questions": [16, 17]}
/// ```
///
/// # Response
///
/// - `200 OK` - `{"success": true, "question": {...}}`, or `"question": null`
///   once every question of the category has been asked
/// - `400 Bad Request` - Empty or malformed body, or an unknown category
pub async fn quiz_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(request): JsonBody<QuizRequest>,
) -> RestResult<Json<QuizResponse>>
where
    S: TriviaStorage,
{
    let filter = request.category_filter()?;

    debug!(
        category = %filter,
        category_type = request
            .quiz_category
            .as_ref()
            .and_then(|c| c.kind.as_deref())
            .unwrap_or(""),
        previous = request.previous_questions.len(),
        "Processing quiz request"
    );

    let mut rng = StdRng::from_entropy();
    let question = next_question(
        state.storage(),
        filter,
        &request.previous_questions,
        &mut rng,
    )
    .await?;

    if question.is_none() {
        debug!(category = %filter, "Quiz pool exhausted");
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
