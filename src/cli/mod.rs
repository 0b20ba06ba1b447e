//! CLI module for tubescout.

pub mod commands;
mod output;

pub use output::{mask_secret, Output};

use clap::{Parser, Subcommand};

/// tubescout - YouTube tools for AI assistants
///
/// Serves transcripts, summaries, channel analysis and founder scouting over MCP,
/// and exposes the same tools directly on the command line.
#[derive(Parser, Debug)]
#[command(name = "tubescout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// YouTube Data API v3 key
    #[arg(long, env = "YOUTUBE_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start MCP server for AI assistant integration (stdio unless configured for http)
    Mcp,

    /// Start the MCP server over HTTP
    Serve {
        /// Host to bind to (defaults to server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the transcript of a video
    Transcript {
        /// YouTube video ID or URL
        video: String,
    },

    /// Summarize a video from its transcript
    Summary {
        /// YouTube video ID or URL
        video: String,
    },

    /// Search videos and summarize each result
    Search {
        /// Search query
        query: String,

        /// Maximum number of results (1-50)
        #[arg(short = 'n', long, default_value = "5")]
        max_results: u32,
    },

    /// Show channel information and statistics
    Channel {
        /// YouTube channel ID
        channel_id: String,
    },

    /// Analyze the nature of a channel's content
    Analyze {
        /// YouTube channel ID
        channel_id: String,

        /// Maximum number of videos to analyze
        #[arg(short, long, default_value = "50")]
        max_videos: u32,
    },

    /// Find founder stories and build business reports
    Scout {
        /// Monthly revenue bracket ($10k/month, $30k/month, $50k/month, $100k/month)
        #[arg(short, long)]
        revenue: Option<String>,

        /// Key topic (Founder Journey, Business Model and Strategy, Revenue Streams and Scale)
        #[arg(short, long)]
        topic: Option<String>,

        /// Target geography (USA, Europe, Asia, Global)
        #[arg(short, long)]
        geography: Option<String>,

        /// Maximum number of videos to analyze
        #[arg(short = 'n', long, default_value = "5")]
        max_results: u32,

        /// Fetch and analyze videos instead of only confirming the selections
        #[arg(long)]
        run: bool,
    },

    /// Check configuration and API key
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration (API key masked)
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "server.port")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Show configuration file path
    Path,
}
