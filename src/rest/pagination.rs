//! Page-number pagination for list and search operations.
//!
//! The catalog API pages with explicit `page` / `page_size` query parameters
//! and answers with an `{ items, pagination }` envelope. Pages are never
//! fetched implicitly: a caller that wants page 2 asks for page 2.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Pagination metadata returned alongside a page of items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The 1-based page number.
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Number of the last page.
    pub last_page: u32,
}

impl Pagination {
    /// Pagination for a complete, unpaged list of `len` items.
    #[must_use]
    pub fn single_page(len: usize) -> Self {
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        Self {
            page: 1,
            page_size: len,
            total: u64::from(len),
            last_page: 1,
        }
    }
}

/// One page of entities plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedCollection<T> {
    /// The entities on this page.
    pub items: Vec<T>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

impl<T> PaginatedCollection<T> {
    /// Wraps a flat list as a single page.
    #[must_use]
    pub fn from_items(items: Vec<T>) -> Self {
        let pagination = Pagination::single_page(items.len());
        Self { items, pagination }
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a PaginatedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Page selection for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// The 1-based page number.
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl PageParams {
    /// Creates page parameters.
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// Free-text search with page selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// The search text.
    pub text: String,
    /// The 1-based page number.
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl SearchParams {
    /// Creates search parameters.
    #[must_use]
    pub fn new(text: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            text: text.into(),
            page,
            page_size,
        }
    }

    /// Builds the query string, carrying the text under `key`.
    #[must_use]
    pub fn to_query(&self, key: &str) -> HashMap<String, String> {
        let mut query = HashMap::new();
        query.insert(key.to_string(), self.text.clone());
        query.insert("page".to_string(), self.page.to_string());
        query.insert("page_size".to_string(), self.page_size.to_string());
        query
    }
}

/// Response body of a list or search call.
///
/// Search endpoints answer either with the paged envelope or with a bare
/// array; the latter becomes a single page.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PageBody<T> {
    Paged(PaginatedCollection<T>),
    Flat(Vec<T>),
}

impl<T> From<PageBody<T>> for PaginatedCollection<T> {
    fn from(body: PageBody<T>) -> Self {
        match body {
            PageBody::Paged(page) => page,
            PageBody::Flat(items) => Self::from_items(items),
        }
    }
}
