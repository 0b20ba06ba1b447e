//! tubescout - YouTube tools for AI assistants
//!
//! An MCP server and CLI that fetches YouTube transcripts and channel data and
//! turns them into plain-text reports with a heuristic analysis pipeline. No
//! external NLP service is involved: summaries, themes, named entities and
//! insights all come from sentence segmentation, keyword tallies and ordered
//! regular expressions.
//!
//! # Architecture
//!
//! - `analysis` - Text segmentation, summaries, theme tallies, entities, insights
//! - `youtube` - The `VideoPlatform` boundary, Data API client and client cache
//! - `tools` - Report composers behind each MCP tool
//! - `mcp` - JSON-RPC 2.0 server (stdio and HTTP transports)
//! - `config` - Configuration file, environment overrides and API key handling
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use tubescout::config::Settings;
//! use tubescout::tools::{self, ToolCall};
//! use tubescout::youtube::PlatformResolver;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?.with_env();
//!     let resolver = PlatformResolver::from_settings(&settings.youtube);
//!
//!     let args = serde_json::json!({"videoId": "dQw4w9WgXcQ"});
//!     let call = ToolCall::parse("get_summary", Some(args))?;
//!     println!("{}", tools::execute(&call, &resolver).await?);
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod tools;
pub mod youtube;

pub use error::{Result, ScoutError};
