//! Question collection handlers.
//!
//! - `GET [base]/questions?page=N` - List one page of questions
//! - `POST [base]/questions` - Create a question
//! - `DELETE [base]/questions/{id}` - Delete a question

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use trivia_persistence::core::TriviaStorage;
use trivia_persistence::error::{ResourceError, StorageError};
use trivia_persistence::types::NewQuestion;

use crate::error::{RestError, RestResult};
use crate::extractors::{JsonBody, PageQuery};
use crate::responses::{CreatedResponse, DeletedResponse, QuestionListResponse, category_map};
use crate::state::AppState;

/// Payload of `POST /questions`.
///
/// Fields are kept as raw JSON so that type mismatches surface as 422
/// rather than as body parse failures.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateQuestionRequest {
    /// Question text.
    pub question: Value,
    /// Answer text.
    pub answer: Value,
    /// Category reference, as a string.
    pub category: Value,
    /// Difficulty, as an integer.
    pub difficulty: Value,
}

fn required_text(field: &str, value: Value) -> RestResult<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Ok(text),
        other => Err(RestError::unprocessable(format!(
            "Field '{}' must be a non-empty string, got {}",
            field, other
        ))),
    }
}

impl CreateQuestionRequest {
    /// Checks field types and converts into a [`NewQuestion`].
    pub fn into_new_question(self) -> RestResult<NewQuestion> {
        let difficulty = self.difficulty.as_i64().ok_or_else(|| {
            RestError::unprocessable(format!(
                "Field 'difficulty' must be an integer, got {}",
                self.difficulty
            ))
        })?;

        Ok(NewQuestion::new(
            required_text("question", self.question)?,
            required_text("answer", self.answer)?,
            required_text("category", self.category)?,
            difficulty,
        ))
    }
}

/// Handler for listing questions.
///
/// # HTTP Request
///
/// `GET [base]/questions?page=N`
///
/// # Response
///
/// - `200 OK` - The page, the total count and all categories
/// - `400 Bad Request` - `page` is not a positive integer
/// - `404 Not Found` - The page holds no questions
pub async fn list_questions_handler<S>(
    State(state): State<AppState<S>>,
    page: PageQuery,
) -> RestResult<Json<QuestionListResponse>>
where
    S: TriviaStorage,
{
    debug!(page = page.page(), "Processing list questions request");

    let request = page.to_request(state.page_size())?;
    let page = state.storage().list(request).await?;
    let categories = state.storage().list_all().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page.items,
        total_questions: page.total,
        categories: category_map(categories),
        current_category: None,
    }))
}

/// Handler for creating a question.
///
/// # HTTP Request
///
/// `POST [base]/questions`
///
/// ```json
/// {"question": "...", "answer": "...", "category": "4", "difficulty": 2}
/// ```
///
/// # Response
///
/// - `200 OK` - `{"success": true, "created": <id>}`
/// - `400 Bad Request` - The body is not JSON
/// - `422 Unprocessable Entity` - A field is missing or has the wrong type
pub async fn create_question_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(request): JsonBody<CreateQuestionRequest>,
) -> RestResult<Json<CreatedResponse>>
where
    S: TriviaStorage,
{
    let question = request.into_new_question()?;

    debug!(
        category = %question.category,
        difficulty = question.difficulty,
        "Processing create question request"
    );

    let created = state.storage().create(question).await?;

    debug!(id = created.id, "Question created");

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
    }))
}

/// Handler for deleting a question.
///
/// # HTTP Request
///
/// `DELETE [base]/questions/{id}`
///
/// # Response
///
/// - `200 OK` - The deleted id plus the refreshed first page
/// - `422 Unprocessable Entity` - The id is not an integer or does not exist
pub async fn delete_question_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<DeletedResponse>>
where
    S: TriviaStorage,
{
    debug!(id = %id, "Processing delete question request");

    let id: i64 = id
        .parse()
        .map_err(|_| RestError::unprocessable(format!("Invalid question id: {}", id)))?;

    // NotFound maps to 422
    state.storage().delete(id).await?;

    debug!(id, "Question deleted");

    // The store may be empty after the delete
    let (questions, total_questions) = match state.storage().list(state.first_page()).await {
        Ok(page) => (page.items, page.total),
        Err(StorageError::Resource(ResourceError::PageOutOfRange { total, .. })) => {
            (Vec::new(), total)
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        questions,
        total_questions,
    }))
}
