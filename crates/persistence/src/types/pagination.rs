//! Pagination types for question listings.
//!
//! Pages are 1-indexed windows over the question list ordered by id.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of questions on a page unless configured otherwise, and the
/// largest page size accepted.
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// A request for one page of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-indexed page number.
    pub page: u32,
    /// Maximum number of questions on the page.
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: QUESTIONS_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Creates a request for the given page with the default page size.
    pub fn new(page: u32) -> Result<Self, ValidationError> {
        Self::default().with_page(page)
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Result<Self, ValidationError> {
        if page == 0 {
            return Err(ValidationError::InvalidPage { page });
        }
        self.page = page;
        Ok(self)
    }

    /// Sets the page size, clamped to `1..=QUESTIONS_PER_PAGE`.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, QUESTIONS_PER_PAGE);
        self
    }

    /// Page size actually used for queries.
    ///
    /// `page_size` is public and deserializable, so it is clamped again here.
    pub fn effective_page_size(&self) -> u32 {
        self.page_size.clamp(1, QUESTIONS_PER_PAGE)
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.effective_page_size())
    }

    /// Number of rows to fetch.
    pub fn limit(&self) -> u64 {
        u64::from(self.effective_page_size())
    }
}

/// One page of results plus the total size of the underlying list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page, never more than the requested page size.
    pub items: Vec<T>,
    /// The page number that was requested.
    pub page: u32,
    /// Total number of items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a page.
    pub fn new(items: Vec<T>, page: u32, total: u64) -> Self {
        Self { items, page, total }
    }

    /// Returns true if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_request() {
        let req = PageRequest::default();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, QUESTIONS_PER_PAGE);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_offset_calculation() {
        let req = PageRequest::new(3).unwrap();
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);

        let req = PageRequest::new(2).unwrap().with_page_size(4);
        assert_eq!(req.offset(), 4);
    }

    #[test]
    fn test_page_size_capped() {
        let req = PageRequest::new(2).unwrap().with_page_size(50);
        assert_eq!(req.page_size, QUESTIONS_PER_PAGE);
        assert_eq!(req.limit(), 10);
        assert_eq!(req.offset(), 10);

        let raw = PageRequest { page: 1, page_size: 500 };
        assert_eq!(raw.limit(), 10);
    }

    #[test]
    fn test_page_zero_rejected() {
        assert!(matches!(
            PageRequest::new(0),
            Err(ValidationError::InvalidPage { page: 0 })
        ));
    }

    #[test]
    fn test_zero_page_size_raised() {
        let req = PageRequest::default().with_page_size(0);
        assert_eq!(req.page_size, 1);
    }

    #[test]
    fn test_page_accessors() {
        let page = Page::new(vec![1, 2, 3], 1, 3);
        assert_eq!(page.len(), 3);
        assert!(!page.is_empty());
        assert!(Page::<i32>::new(vec![], 5, 3).is_empty());
    }
}
