//! Pagination types
//!
//! Wire shape of a list page, the accumulated result, and the per-call
//! walk state.

use serde::{Deserialize, Serialize};

/// Items requested per page. Fixed policy, not a caller tunable.
pub const PAGE_SIZE: u32 = 100;

/// Number of the first page
pub const FIRST_PAGE: u32 = 1;

/// One page of a list endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct ListPage<T> {
    /// Server-side total; informational only
    #[serde(default)]
    pub count: Option<u64>,
    /// URL of the next page, null on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page; a missing or null array counts as empty
    pub results: Option<Vec<T>>,
}

impl<T> ListPage<T> {
    /// Whether the server advertises another page
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.results.as_ref().map_or(0, Vec::len)
    }

    /// Check if the page carries no items
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the items out of the page
    pub fn into_results(self) -> Vec<T> {
        self.results.unwrap_or_default()
    }
}

/// Every item of a list resource, in page order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedList<T> {
    /// Number of items actually collected
    pub count: usize,
    /// Items from all pages, concatenated in request order
    pub results: Vec<T>,
}

impl<T> AggregatedList<T> {
    /// Build the result from collected items; `count` is derived from them.
    pub fn from_results(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }

    /// Check if nothing was collected
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> Default for AggregatedList<T> {
    fn default() -> Self {
        Self::from_results(Vec::new())
    }
}

impl<T> IntoIterator for AggregatedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Tracks the walk over one list endpoint
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Page to request next
    pub page: u32,
    /// Pages requested so far
    pub requests: u32,
    /// Items collected so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            requests: 0,
            total_fetched: 0,
            done: false,
        }
    }
}

impl PaginationState {
    /// Create a new pagination state starting at page 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a received page and decide whether to continue.
    ///
    /// An empty page ends the walk even when `has_next` is set, so an
    /// inconsistent `next` can never loop forever.
    pub fn record_page(&mut self, records: usize, has_next: bool) {
        self.requests += 1;
        self.total_fetched += records as u64;

        if records > 0 && has_next {
            self.page += 1;
        } else {
            self.done = true;
        }
    }
}

/// Path of one page of a list resource.
///
/// The caller query is appended verbatim to `base_path`; page parameters are
/// joined with `&` when it already carries a `?`, otherwise with `?`.
pub fn paginated_path(base_path: &str, query: &str, page: u32) -> String {
    let separator = if query.contains('?') { '&' } else { '?' };
    format!("{base_path}{query}{separator}page={page}&page_size={PAGE_SIZE}")
}
