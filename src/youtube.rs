//! Top-level client composing every resource service

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, SharedExecutor};
use crate::resources::{Channels, Comments, Playlists, Search, Videos};
use std::sync::Arc;

/// Entry point bundling all resource services over one executor
#[derive(Clone)]
pub struct YouTube {
    pub videos: Videos,
    pub channels: Channels,
    pub playlists: Playlists,
    pub search: Search,
    pub comments: Comments,
}

impl YouTube {
    /// Create a client backed by [`HttpClient`]
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = HttpClient::new(config)?;
        Ok(Self::with_executor(Arc::new(client)))
    }

    /// Create a client with an API key and default settings
    pub fn with_api_key(key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::with_api_key(key))
    }

    /// Create a client over any executor
    pub fn with_executor(executor: SharedExecutor) -> Self {
        Self {
            videos: Videos::new(executor.clone()),
            channels: Channels::new(executor.clone()),
            playlists: Playlists::new(executor.clone()),
            search: Search::new(executor.clone()),
            comments: Comments::new(executor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::http::Executor;
    use crate::types::{Endpoint, Page, QueryParams};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingExecutor {
        endpoints: Mutex<Vec<Endpoint>>,
    }

    #[async_trait]
    impl Executor for RecordingExecutor {
        async fn execute(&self, endpoint: Endpoint, _params: &QueryParams) -> Result<Page> {
            self.endpoints.lock().unwrap().push(endpoint);
            Ok(Page {
                items: vec![json!({"id": endpoint.path()})],
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_services_share_executor() {
        let executor = Arc::new(RecordingExecutor::default());
        let yt = YouTube::with_executor(executor.clone());

        yt.videos.get_video("v").await.unwrap();
        yt.channels.get_channel("c").await.unwrap();
        yt.playlists.get_playlist("p").await.unwrap();
        yt.search.search_videos("q", 5).await.unwrap();
        yt.comments.viewer_comments("v", "owner", 5).await.unwrap();

        assert_eq!(
            *executor.endpoints.lock().unwrap(),
            vec![
                Endpoint::Videos,
                Endpoint::Channels,
                Endpoint::Playlists,
                Endpoint::Search,
                Endpoint::CommentThreads
            ]
        );
    }

    #[test]
    fn test_new_requires_credential() {
        let result = YouTube::new(ClientConfig::default());
        assert!(matches!(result, Err(Error::MissingConfigField { .. })));
    }
}
