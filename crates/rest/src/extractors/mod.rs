//! Axum extractors for trivia requests.
//!
//! - [`JsonBody`] - Parse a JSON request body, rejecting with the error envelope
//! - [`PageQuery`] - Extract the `page` query parameter

mod json_body;
mod pagination;

pub use json_body::{JsonBody, JsonBodyRejection};
pub use pagination::PageQuery;
