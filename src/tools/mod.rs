//! Tool implementations: each composes fetched data and analysis output into a
//! plain-text report.
//!
//! Composers never analyse text themselves; they call into [`crate::analysis`] and
//! fetch through [`VideoPlatform`]. Multi-video tools work through their list
//! sequentially, so report order always matches input order.

pub mod channel_analysis;
pub mod channel_info;
pub mod founder_scout;
pub mod search;
pub mod summary;
pub mod transcript;

use crate::error::{Result, ScoutError};
use crate::youtube::{extract_video_id, PlatformResolver, VideoPlatform};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

pub use founder_scout::FounderScoutArgs;

/// Rule printed between report sections.
pub(crate) fn separator() -> String {
    "=".repeat(80)
}

/// Arguments addressing a single video.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoArgs {
    pub video_id: Option<String>,
    pub api_key: Option<String>,
}

impl VideoArgs {
    /// The video id, accepting watch URLs as well as bare ids.
    pub fn require_video_id(&self) -> Result<String> {
        let raw = require("videoId", &self.video_id)?;
        Ok(extract_video_id(raw).unwrap_or_else(|| raw.trim().to_string()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchArgs {
    pub query: Option<String>,
    pub max_results: Option<u32>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelArgs {
    pub channel_id: Option<String>,
    pub max_videos: Option<u32>,
    pub api_key: Option<String>,
}

/// A parsed tool invocation.
#[derive(Debug, Clone)]
pub enum ToolCall {
    GetTranscript(VideoArgs),
    GetSummary(VideoArgs),
    SearchVideos(SearchArgs),
    GetChannelInfo(ChannelArgs),
    AnalyzeChannel(ChannelArgs),
    FounderScout(FounderScoutArgs),
}

impl ToolCall {
    /// Parse a tool name and its JSON arguments.
    pub fn parse(name: &str, arguments: Option<Value>) -> Result<Self> {
        let args = match arguments {
            Some(Value::Null) | None => Value::Object(Default::default()),
            Some(v) => v,
        };

        let call = match name {
            "get_transcript" => ToolCall::GetTranscript(arguments_as(args)?),
            "get_summary" => ToolCall::GetSummary(arguments_as(args)?),
            "search_videos" => ToolCall::SearchVideos(arguments_as(args)?),
            "get_channel_info" => ToolCall::GetChannelInfo(arguments_as(args)?),
            "analyze_channel" => ToolCall::AnalyzeChannel(arguments_as(args)?),
            "founder_scout" => ToolCall::FounderScout(arguments_as(args)?),
            _ => return Err(ScoutError::UnknownTool(name.to_string())),
        };
        Ok(call)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::GetTranscript(_) => "get_transcript",
            ToolCall::GetSummary(_) => "get_summary",
            ToolCall::SearchVideos(_) => "search_videos",
            ToolCall::GetChannelInfo(_) => "get_channel_info",
            ToolCall::AnalyzeChannel(_) => "analyze_channel",
            ToolCall::FounderScout(_) => "founder_scout",
        }
    }

    fn api_key(&self) -> Option<&str> {
        match self {
            ToolCall::GetTranscript(a) | ToolCall::GetSummary(a) => a.api_key.as_deref(),
            ToolCall::SearchVideos(a) => a.api_key.as_deref(),
            ToolCall::GetChannelInfo(a) | ToolCall::AnalyzeChannel(a) => a.api_key.as_deref(),
            ToolCall::FounderScout(a) => a.api_key.as_deref(),
        }
    }

    /// Run against an already resolved platform.
    pub async fn run(&self, platform: &dyn VideoPlatform) -> Result<String> {
        match self {
            ToolCall::GetTranscript(args) => transcript::handle(args, platform).await,
            ToolCall::GetSummary(args) => summary::handle(args, platform).await,
            ToolCall::SearchVideos(args) => search::handle(args, platform).await,
            ToolCall::GetChannelInfo(args) => channel_info::handle(args, platform).await,
            ToolCall::AnalyzeChannel(args) => channel_analysis::handle(args, platform).await,
            ToolCall::FounderScout(args) => founder_scout::handle(args, platform).await,
        }
    }
}

/// Execute a tool call, resolving the platform client only when the call needs one.
#[instrument(skip_all, fields(tool = call.name()))]
pub async fn execute(call: &ToolCall, resolver: &PlatformResolver) -> Result<String> {
    // Founder scout prompts and confirmations are answered without touching the network.
    if let ToolCall::FounderScout(args) = call {
        if let Some(text) = founder_scout::preflight(args)? {
            return Ok(text);
        }
    }

    let platform = resolver.resolve(call.api_key())?;
    let output = call.run(platform.as_ref()).await?;
    info!("Tool {} produced {} chars", call.name(), output.len());
    Ok(output)
}

fn arguments_as<T: DeserializeOwned>(args: Value) -> Result<T> {
    serde_json::from_value(args)
        .map_err(|e| ScoutError::InvalidInput(format!("invalid arguments: {}", e)))
}

/// A required, non-blank string argument.
pub(crate) fn require<'a>(name: &str, value: &'a Option<String>) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ScoutError::MissingParameter(name.to_string()))
}
