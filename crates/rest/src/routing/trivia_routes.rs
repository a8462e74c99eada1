//! Trivia route configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};
use trivia_persistence::core::{Backend, TriviaStorage};

use crate::handlers;
use crate::state::AppState;

/// Creates all trivia API routes.
///
/// # Routes
///
/// - `GET /questions?page=N` - Paginated question list
/// - `POST /questions` - Create a question
/// - `DELETE /questions/{id}` - Delete a question
/// - `GET /categories` - All categories
/// - `GET /categories/{id}/questions` - Questions of one category
/// - `POST /search` - Search question text
/// - `POST /quizzes` - Next quiz question
/// - `GET /health` - Health check
///
/// Unknown paths get the 404 envelope and known paths called with another
/// method get the 405 envelope.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: TriviaStorage + Backend + 'static,
{
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions_handler::<S>).post(handlers::create_question_handler::<S>),
        )
        .route("/questions/{id}", delete(handlers::delete_question_handler::<S>))
        .route("/categories", get(handlers::list_categories_handler::<S>))
        .route(
            "/categories/{id}/questions",
            get(handlers::category_questions_handler::<S>),
        )
        .route("/search", post(handlers::search_handler::<S>))
        .route("/quizzes", post(handlers::quiz_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .fallback(handlers::not_found_handler)
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        .with_state(state)
}
