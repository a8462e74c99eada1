//! HTTP request handlers for the trivia API.
//!
//! - [`questions`] - List, create and delete questions
//! - [`categories`] - List categories and the questions of one category
//! - [`search`] - Substring search over question text
//! - [`quizzes`] - Draw the next quiz question
//! - [`health`] - Health check endpoint
//! - [`fallback`] - 404 and 405 envelopes for unmatched requests

pub mod categories;
pub mod fallback;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod search;

// Re-export handlers for convenience
pub use categories::{category_questions_handler, list_categories_handler};
pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::health_handler;
pub use questions::{create_question_handler, delete_question_handler, list_questions_handler};
pub use quizzes::quiz_handler;
pub use search::search_handler;
