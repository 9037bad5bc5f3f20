//! Paged-list envelope shared by every list endpoint.

use serde::Deserialize;
use url::Url;

use super::PaginationCount;

/// Query parameter the API uses for cursor-based paging.
const CURSOR_PARAM: &str = "cursor";

/// One page of results.
///
/// Paging is manual: pass [`PaginatedResponse::next_cursor`] back as the
/// `cursor` parameter to request the following page.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    /// Total matching records (may be unknown, see [`PaginationCount`]).
    pub count: PaginationCount,

    /// URL of the next page.
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page.
    #[serde(default)]
    pub previous: Option<String>,

    /// Records in this page, in API order.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Check if there is a following page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Check if there is a preceding page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// The `cursor` value embedded in the next-page URL.
    #[must_use]
    pub fn next_cursor(&self) -> Option<String> {
        self.next.as_deref().and_then(cursor_of)
    }

    /// The `cursor` value embedded in the previous-page URL.
    #[must_use]
    pub fn previous_cursor(&self) -> Option<String> {
        self.previous.as_deref().and_then(cursor_of)
    }

    /// Number of records in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over the records in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }
}

impl<T> IntoIterator for PaginatedResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PaginatedResponse<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

fn cursor_of(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    url.query_pairs().find(|(k, _)| k == CURSOR_PARAM).map(|(_, v)| v.into_owned())
}
