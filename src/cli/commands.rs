//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// YouTube Data API v3 command-line client
#[derive(Parser, Debug)]
#[command(name = "youtube-data")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key (overrides config file and YOUTUBE_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// OAuth access token (overrides config file and YOUTUBE_ACCESS_TOKEN)
    #[arg(long, global = true)]
    pub access_token: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one video
    Video {
        /// Video id
        id: String,
    },

    /// Fetch many videos by id
    Videos {
        /// Video ids
        #[arg(required = true)]
        ids: Vec<String>,

        /// Maximum videos to return
        #[arg(long, default_value = "50")]
        max_results: usize,
    },

    /// Fetch one channel
    Channel {
        /// Channel id
        id: String,
    },

    /// List channels
    Channels {
        /// Resolve a legacy username
        #[arg(long)]
        for_username: Option<String>,

        /// Maximum channels to return
        #[arg(long, default_value = "50")]
        max_results: usize,

        /// Continuation token from an earlier run
        #[arg(long)]
        page_token: Option<String>,
    },

    /// Fetch one playlist
    Playlist {
        /// Playlist id
        id: String,
    },

    /// List a channel's playlists
    Playlists {
        /// Owning channel id
        channel_id: String,

        /// Maximum playlists to return
        #[arg(long, default_value = "50")]
        max_results: usize,

        /// Continuation token from an earlier run
        #[arg(long)]
        page_token: Option<String>,
    },

    /// Search for videos
    Search {
        /// Search query
        query: String,

        /// Maximum results to return
        #[arg(long, default_value = "5")]
        max_results: usize,

        /// Follow continuation tokens instead of returning one page
        #[arg(long)]
        paginate: bool,

        /// Continuation token from an earlier run (implies --paginate)
        #[arg(long)]
        page_token: Option<String>,
    },

    /// List viewer comments on a video
    Comments {
        /// Video id
        video_id: String,

        /// Channel id of the video owner, whose comments are skipped
        channel_id: String,

        /// Maximum comments to return
        #[arg(long, default_value = "100")]
        max_results: usize,

        /// Continuation token from an earlier run
        #[arg(long)]
        page_token: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_videos() {
        let cli = Cli::parse_from([
            "youtube-data",
            "--api-key",
            "k",
            "videos",
            "a",
            "b",
            "--max-results",
            "10",
        ]);
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Videos { ids, max_results } => {
                assert_eq!(ids, vec!["a", "b"]);
                assert_eq!(max_results, 10);
            }
            other => panic!("Expected Videos, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_comments_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "youtube-data",
            "comments",
            "vid",
            "UCowner",
            "--format",
            "pretty",
            "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Pretty);
        match cli.command {
            Commands::Comments {
                video_id,
                channel_id,
                max_results,
                page_token,
            } => {
                assert_eq!(video_id, "vid");
                assert_eq!(channel_id, "UCowner");
                assert_eq!(max_results, 100);
                assert!(page_token.is_none());
            }
            other => panic!("Expected Comments, got {other:?}"),
        }
    }

    #[test]
    fn test_videos_requires_ids() {
        assert!(Cli::try_parse_from(["youtube-data", "videos"]).is_err());
    }
}
