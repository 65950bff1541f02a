//! `playlists` endpoint

use crate::error::Result;
use crate::http::SharedExecutor;
use crate::pagination::{paginate, ItemStream};
use crate::types::{Endpoint, Page, QueryParams};

/// Playlist lookups
#[derive(Clone)]
pub struct Playlists {
    executor: SharedExecutor,
}

impl Playlists {
    pub const PART: &'static str = "snippet,contentDetails";

    pub fn new(executor: SharedExecutor) -> Self {
        Self { executor }
    }

    /// Fetch a single playlist by id
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Page> {
        let params = QueryParams::new()
            .with("id", playlist_id)
            .with("part", Self::PART);
        self.executor.execute(Endpoint::Playlists, &params).await
    }

    /// Page through the playlists owned by a channel
    pub fn list_playlists(
        &self,
        channel_id: &str,
        max_results: usize,
        page_token: Option<String>,
    ) -> ItemStream {
        let params = QueryParams::new()
            .with("channelId", channel_id)
            .with("part", Self::PART);
        paginate(
            self.executor.clone(),
            Endpoint::Playlists,
            params,
            max_results,
            page_token,
            None,
        )
    }
}
