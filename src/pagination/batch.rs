//! Id-batched lookups
//!
//! Endpoints like `videos` accept a comma-joined `id` list of bounded length.
//! Identifiers are split into chunks of at most the page cap and each chunk
//! is paginated in turn, all chunks sharing one `max_results` budget.

use super::cursor::CursorPaginator;
use super::types::{ItemFilter, ItemStream};
use crate::error::Result;
use crate::http::SharedExecutor;
use crate::types::{Endpoint, JsonValue, QueryParams};
use futures::StreamExt;
use std::collections::VecDeque;
use tracing::debug;

/// Query parameter carrying the identifier list
pub const ID_PARAM: &str = "id";

/// Paginates a multi-id lookup one chunk at a time
#[derive(Clone)]
pub struct IdBatchPaginator {
    executor: SharedExecutor,
    endpoint: Endpoint,
    params: QueryParams,
    ids: Vec<String>,
    max_results: usize,
    page_token: Option<String>,
    filter: Option<ItemFilter>,
}

impl IdBatchPaginator {
    /// Create a paginator over `ids`; `max_results` defaults to one full page
    pub fn new(
        executor: SharedExecutor,
        endpoint: Endpoint,
        params: QueryParams,
        ids: Vec<String>,
    ) -> Self {
        Self {
            executor,
            endpoint,
            params,
            ids,
            max_results: endpoint.page_cap(),
            page_token: None,
            filter: None,
        }
    }

    /// Total number of items to produce across all chunks
    #[must_use]
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Token applied to the first chunk's first request
    #[must_use]
    pub fn page_token(mut self, token: Option<String>) -> Self {
        self.page_token = token;
        self
    }

    /// Skip items the predicate rejects
    #[must_use]
    pub fn filter(mut self, filter: Option<ItemFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Identifier chunks in request order
    pub fn chunks(&self) -> Vec<Vec<String>> {
        self.ids
            .chunks(self.endpoint.page_cap())
            .map(<[String]>::to_vec)
            .collect()
    }

    /// Start the run; nothing is requested until the stream is polled
    pub fn into_stream(self) -> ItemStream {
        let run = BatchRun {
            chunks: self.chunks().into(),
            first_token: self.page_token.clone(),
            paginator: self,
            current: None,
            fetched: 0,
        };
        Box::pin(futures::stream::try_unfold(run, BatchRun::next_item))
    }

    /// Cursor run for one chunk with `remaining` items left in the budget
    fn chunk_stream(
        &self,
        chunk: &[String],
        remaining: usize,
        token: Option<String>,
    ) -> ItemStream {
        let params = self.params.clone().with_ids(ID_PARAM, chunk);
        CursorPaginator::new(self.executor.clone(), self.endpoint, params)
            .max_results(remaining)
            .page_token(token)
            .filter(self.filter.clone())
            .into_stream()
    }
}

struct BatchRun {
    paginator: IdBatchPaginator,
    chunks: VecDeque<Vec<String>>,
    first_token: Option<String>,
    current: Option<ItemStream>,
    fetched: usize,
}

impl BatchRun {
    async fn next_item(mut self) -> Result<Option<(JsonValue, Self)>> {
        loop {
            if self.fetched >= self.paginator.max_results {
                return Ok(None);
            }

            if let Some(stream) = self.current.as_mut() {
                match stream.next().await {
                    Some(item) => {
                        let item = item?;
                        self.fetched += 1;
                        return Ok(Some((item, self)));
                    }
                    None => self.current = None,
                }
                continue;
            }

            let Some(chunk) = self.chunks.pop_front() else {
                return Ok(None);
            };

            let remaining = self.paginator.max_results - self.fetched;
            debug!(
                endpoint = %self.paginator.endpoint,
                ids = chunk.len(),
                remaining,
                "Starting id batch"
            );
            let token = self.first_token.take();
            self.current = Some(self.paginator.chunk_stream(&chunk, remaining, token));
        }
    }
}
