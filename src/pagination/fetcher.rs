//! Generic list fetcher
//!
//! One routine serves documents, tags, correspondents and document types.

use super::types::{paginated_path, AggregatedList, ListPage, PaginationState};
use crate::error::Result;
use crate::http::HttpClient;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Anything that can return a single list page for a request path
#[async_trait]
pub trait PageSource: Send + Sync {
    /// GET one page. Non-success statuses must surface as errors.
    async fn fetch_page<T>(&self, path: &str) -> Result<ListPage<T>>
    where
        T: DeserializeOwned + Send;
}

#[async_trait]
impl PageSource for HttpClient {
    async fn fetch_page<T>(&self, path: &str) -> Result<ListPage<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.get_json(path).await
    }
}

/// Collects every item of a cursor-paginated list endpoint
#[derive(Debug)]
pub struct PaginatedFetcher<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S> PaginatedFetcher<'a, S>
where
    S: PageSource + ?Sized,
{
    /// Create a fetcher over a page source
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Fetch all pages of `base_path` + `query`.
    ///
    /// Pages are requested one after another starting at page 1. The first
    /// failing page aborts the call and everything collected so far is
    /// dropped.
    pub async fn fetch_all<T>(&self, base_path: &str, query: &str) -> Result<AggregatedList<T>>
    where
        T: DeserializeOwned + Send,
    {
        let mut state = PaginationState::new();
        let mut results: Vec<T> = Vec::new();

        while !state.done {
            let path = paginated_path(base_path, query, state.page);
            debug!(path = %path, page = state.page, "Fetching list page");

            let page: ListPage<T> = self.source.fetch_page(&path).await?;
            let has_next = page.has_next();
            let records = page.len();

            results.extend(page.into_results());
            state.record_page(records, has_next);
        }

        debug!(
            base_path,
            requests = state.requests,
            total = state.total_fetched,
            "Pagination complete"
        );
        Ok(AggregatedList::from_results(results))
    }
}
