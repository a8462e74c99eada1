//! Core types for stored questions and categories.
//!
//! - [`Question`] - A stored trivia question with its assigned id
//! - [`NewQuestion`] - A validated question that has not been persisted yet
//! - [`Category`] - A question category (seed data)
//! - [`PageRequest`] / [`Page`] - Offset pagination over the id-ordered list

mod pagination;
mod question;

pub use pagination::{Page, PageRequest, QUESTIONS_PER_PAGE};
pub use question::{Category, CategoryFilter, NewQuestion, Question};
