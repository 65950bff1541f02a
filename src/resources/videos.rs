//! `videos` endpoint

use crate::error::Result;
use crate::http::SharedExecutor;
use crate::pagination::{IdBatchPaginator, ItemStream};
use crate::types::{Endpoint, Page, QueryParams};

/// Video lookups
#[derive(Clone)]
pub struct Videos {
    executor: SharedExecutor,
}

impl Videos {
    pub const PART: &'static str = "snippet,contentDetails,statistics";

    pub fn new(executor: SharedExecutor) -> Self {
        Self { executor }
    }

    /// Fetch a single video by id
    pub async fn get_video(&self, video_id: &str) -> Result<Page> {
        let params = QueryParams::new()
            .with("id", video_id)
            .with("part", Self::PART);
        self.executor.execute(Endpoint::Videos, &params).await
    }

    /// Fetch many videos by id, 50 ids per request
    pub fn list_videos<S: AsRef<str>>(
        &self,
        video_ids: &[S],
        max_results: usize,
        page_token: Option<String>,
    ) -> ItemStream {
        let ids = video_ids.iter().map(|id| id.as_ref().to_string()).collect();
        IdBatchPaginator::new(
            self.executor.clone(),
            Endpoint::Videos,
            QueryParams::new().with("part", Self::PART),
            ids,
        )
        .max_results(max_results)
        .page_token(page_token)
        .into_stream()
    }
}
