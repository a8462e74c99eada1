//! Pagination extractor.
//!
//! Extracts the 1-indexed `page` query parameter.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use trivia_persistence::types::PageRequest;

use crate::error::RestError;

/// Axum extractor for the `page` query parameter.
///
/// A missing parameter means page 1. A value that is not a positive integer
/// is rejected with 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    page: u32,
}

/// Query parameters for pagination.
#[derive(Debug, Deserialize)]
struct PageParams {
    page: Option<String>,
}

impl PageQuery {
    /// Parses a raw `page` value.
    pub fn parse(raw: Option<&str>) -> Result<Self, RestError> {
        let page = match raw {
            None => 1,
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| RestError::bad_request(format!("Invalid page number: {}", value)))?,
        };

        if page == 0 {
            return Err(RestError::bad_request("Page numbers start at 1"));
        }

        Ok(Self { page })
    }

    /// Returns the page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Builds a page request with the given page size.
    pub fn to_request(&self, page_size: u32) -> Result<PageRequest, RestError> {
        Ok(PageRequest::new(self.page)?.with_page_size(page_size))
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::bad_request(format!("Invalid query string: {}", e)))?;

        Self::parse(params.page.as_deref())
    }
}
