//! Test fixtures for REST API testing.

use serde_json::{Value, json};
use trivia_persistence::types::NewQuestion;

/// A valid create payload with a free-form category reference.
pub fn new_question_json() -> Value {
    json!({
        "question": "will this test pass ?",
        "answer": "I hope it does.",
        "category": "pop",
        "difficulty": 44
    })
}

/// A create payload with a numeric category and a textual difficulty.
pub fn wrong_question_json() -> Value {
    json!({
        "question": "will this test pass ?",
        "answer": "I hope it does not.",
        "category": 44,
        "difficulty": "wrong"
    })
}

/// A question inserted directly into the store.
pub fn pop_question() -> NewQuestion {
    NewQuestion::new("will this test pass ?", "I hope it does.", "pop", 44)
}

/// A quiz request for the Art category.
pub fn art_quiz(previous: &[i64]) -> Value {
    json!({
        "quiz_category": {"id": "2", "type": "Art"},
        "previous_questions": previous
    })
}
