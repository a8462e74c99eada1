//! Response envelopes for the trivia API.
//!
//! Every successful response carries `"success": true` next to its payload.
//!
//! - [`envelope`] - Typed response bodies for each endpoint

pub mod envelope;

pub use envelope::{
    CategoriesResponse, CategoryMap, CategoryQuestionsResponse, CreatedResponse,
    DeletedResponse, QuestionListResponse, QuizResponse, SearchResponse, category_map,
};
