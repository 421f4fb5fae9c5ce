//! Pagination module
//!
//! Walks cursor-paginated list endpoints and accumulates every item.
//!
//! # Overview
//!
//! Paperless list endpoints return `{count, next, previous, results}` and
//! only expose a forward `next` cursor, so collecting a whole resource means
//! requesting page 1, 2, 3, ... until `next` is null. [`PaginatedFetcher`]
//! does that walk for any path, against any [`PageSource`].

mod fetcher;
mod types;

pub use fetcher::{PageSource, PaginatedFetcher};
pub use types::{
    paginated_path, AggregatedList, ListPage, PaginationState, FIRST_PAGE, PAGE_SIZE,
};
