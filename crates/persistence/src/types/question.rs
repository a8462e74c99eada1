//! Question and category records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A persisted trivia question.
///
/// The `category` field holds the id of a [`Category`] as text. The reference
/// is loose: the database does not enforce it as a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Assigned by the database, never reused while the row exists.
    pub id: i64,
    /// The question text.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// Category reference (the category id as text).
    pub category: String,
    /// Difficulty rating.
    pub difficulty: i64,
}

/// A question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    /// The question text.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// Category reference (the category id as text).
    pub category: String,
    /// Difficulty rating.
    pub difficulty: i64,
}

impl NewQuestion {
    /// Creates a new question payload.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        difficulty: i64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            difficulty,
        }
    }

    /// Checks that the text fields are not blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("question", &self.question),
            ("answer", &self.answer),
            ("category", &self.category),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingRequiredField {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Attaches the id assigned by the database.
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// A question category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id.
    pub id: i64,
    /// Display name, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    /// Creates a category.
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Restricts a question pool to a single category, or leaves it open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Questions from every category.
    #[default]
    All,
    /// Questions whose category reference equals this id.
    Only(i64),
}

impl CategoryFilter {
    /// Builds a filter from a client-supplied category id, where `0` means all.
    pub fn from_id(id: i64) -> Self {
        if id == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id)
        }
    }

    /// Returns the category id, if restricted.
    pub fn category_id(&self) -> Option<i64> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(id) => Some(*id),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(id) => write!(f, "{}", id),
        }
    }
}
