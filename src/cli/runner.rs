//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{ClientConfig, ClientConfigBuilder};
use crate::error::Result;
use crate::pagination::ItemStream;
use crate::types::JsonValue;
use crate::youtube::YouTube;
use futures::StreamExt;
use std::io::Write;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing to stdout
    pub async fn run(&self) -> Result<()> {
        self.run_to(&mut std::io::stdout()).await
    }

    /// Run the CLI command, printing to `out`
    pub async fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let yt = YouTube::new(self.client_config()?)?;

        match &self.cli.command {
            Commands::Video { id } => {
                let page = yt.videos.get_video(id).await?;
                self.emit(out, &serde_json::to_value(page)?)
            }
            Commands::Videos { ids, max_results } => {
                let stream = yt.videos.list_videos(ids.as_slice(), *max_results, None);
                self.emit_stream(out, stream).await
            }
            Commands::Channel { id } => {
                let page = yt.channels.get_channel(id).await?;
                self.emit(out, &serde_json::to_value(page)?)
            }
            Commands::Channels {
                for_username,
                max_results,
                page_token,
            } => {
                let stream = yt.channels.list_channels(
                    for_username.as_deref(),
                    *max_results,
                    page_token.clone(),
                );
                self.emit_stream(out, stream).await
            }
            Commands::Playlist { id } => {
                let page = yt.playlists.get_playlist(id).await?;
                self.emit(out, &serde_json::to_value(page)?)
            }
            Commands::Playlists {
                channel_id,
                max_results,
                page_token,
            } => {
                let stream =
                    yt.playlists
                        .list_playlists(channel_id, *max_results, page_token.clone());
                self.emit_stream(out, stream).await
            }
            Commands::Search {
                query,
                max_results,
                paginate,
                page_token,
            } => {
                if *paginate || page_token.is_some() {
                    let stream =
                        yt.search
                            .search_videos_paginated(query, *max_results, page_token.clone());
                    self.emit_stream(out, stream).await
                } else {
                    let page = yt.search.search_videos(query, *max_results).await?;
                    self.emit(out, &serde_json::to_value(page)?)
                }
            }
            Commands::Comments {
                video_id,
                channel_id,
                max_results,
                page_token,
            } => {
                let stream = yt.comments.viewer_comments_paginated(
                    video_id,
                    channel_id,
                    *max_results,
                    page_token.clone(),
                );
                self.emit_stream(out, stream).await
            }
        }
    }

    /// Resolve configuration: file or environment, then command-line overrides
    pub fn client_config(&self) -> Result<ClientConfig> {
        let base = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env(),
        };

        let mut builder = ClientConfigBuilder::from_config(base);
        if let Some(key) = &self.cli.api_key {
            builder = builder.api_key(key);
        }
        if let Some(token) = &self.cli.access_token {
            builder = builder.access_token(token);
        }
        if let Some(url) = &self.cli.base_url {
            builder = builder.base_url(url);
        }

        let config = builder.build();
        debug!(
            base_url = %config.base_url,
            credential = ?config.credential,
            "Resolved client config"
        );
        Ok(config)
    }

    /// Print items as they arrive; items printed before an error stay printed
    async fn emit_stream<W: Write>(&self, out: &mut W, mut stream: ItemStream) -> Result<()> {
        let mut count = 0usize;
        while let Some(item) = stream.next().await {
            self.emit(out, &item?)?;
            count += 1;
        }
        info!(count, "Finished listing");
        Ok(())
    }

    fn emit<W: Write>(&self, out: &mut W, value: &JsonValue) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(value)?)?,
            OutputFormat::Pretty => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credential;
    use clap::Parser;
    use std::io::Write as _;

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: from-file\nbase_url: http://file/").unwrap();
        let config_path = file.path().to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "youtube-data",
            "-C",
            config_path.as_str(),
            "--access-token",
            "from-flag",
            "video",
            "abc",
        ]);
        let config = Runner::new(cli).client_config().unwrap();

        assert_eq!(config.credential, Some(Credential::access_token("from-flag")));
        assert_eq!(config.base_url, "http://file/");
    }

    #[test]
    fn test_config_file_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: from-file").unwrap();
        let config_path = file.path().to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "youtube-data",
            "--config",
            config_path.as_str(),
            "channel",
            "UC1",
        ]);
        let config = Runner::new(cli).client_config().unwrap();
        assert_eq!(config.credential, Some(Credential::api_key("from-file")));
    }
}
