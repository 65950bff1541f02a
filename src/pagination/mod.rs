//! Pagination module
//!
//! Supports: `nextPageToken` cursor following, and id-batched lookups that run
//! one cursor pagination per chunk of identifiers.
//!
//! # Overview
//!
//! Every list endpoint of the Data API paginates the same way: ask for at most
//! `maxResults` items, read `nextPageToken`, send it back as `pageToken`. The
//! paginators here do that lazily as a [`Stream`](futures::Stream): nothing is
//! requested until the stream is polled, each page is fetched whole and then
//! drained one item at a time, and dropping the stream stops all further
//! requests.

mod batch;
mod cursor;
mod types;

pub use batch::IdBatchPaginator;
pub use cursor::{paginate, CursorPaginator};
pub use types::{
    collect_items, item_filter, ItemFilter, ItemStream, PaginationState, MAX_RESULTS_PARAM,
    PAGE_TOKEN_PARAM,
};
