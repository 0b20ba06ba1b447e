//! YouTube platform boundary.
//!
//! Report composers only talk to the [`VideoPlatform`] trait. The production
//! implementation is [`YoutubeClient`], which combines the YouTube Data API v3 with
//! caption scraping for transcripts.

mod cache;
mod client;
#[cfg(test)]
pub(crate) mod fake;
mod transcript;

pub use cache::{youtube_factory, ClientCache, PlatformFactory, PlatformResolver};
pub use client::YoutubeClient;
pub use transcript::{CaptionSegment, TranscriptFetcher};

use crate::error::Result;
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Data the report composers need from the video platform.
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    /// Full transcript text of a video (may fall back to its description).
    async fn get_transcript(&self, video_id: &str) -> Result<String>;

    /// Search videos by free-text query.
    async fn search_videos(&self, query: &str, max_results: u32) -> Result<Vec<SearchItem>>;

    /// Channel metadata. Fails if the channel does not exist.
    async fn get_channel_info(&self, channel_id: &str) -> Result<ChannelInfo>;

    /// Most recent uploads of a channel.
    async fn get_channel_videos(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistItem>>;

    /// Video description, if one exists.
    async fn get_video_description(&self, video_id: &str) -> Result<Option<String>>;
}

/// Snippet shared by search results and playlist items.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub published_at: Option<String>,
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: Option<String>,
}

/// One hit from the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchItem {
    pub id: ResourceId,
    pub snippet: Snippet,
}

impl SearchItem {
    pub fn video_id(&self) -> Option<&str> {
        self.id.video_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// One entry of a channel's uploads playlist.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaylistItem {
    pub snippet: Snippet,
    pub content_details: Option<ResourceId>,
}

impl PlaylistItem {
    /// Video id from `contentDetails`, else from the snippet's resource id.
    pub fn video_id(&self) -> Option<&str> {
        self.content_details
            .as_ref()
            .and_then(|d| d.video_id.as_deref())
            .or_else(|| self.snippet.resource_id.as_ref()?.video_id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// Channel resource from the channels endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelInfo {
    pub id: String,
    pub snippet: ChannelSnippet,
    pub statistics: ChannelStatistics,
    pub content_details: ChannelContentDetails,
    pub branding_settings: BrandingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelSnippet {
    pub title: String,
    pub description: String,
    pub custom_url: Option<String>,
    pub published_at: Option<String>,
    pub country: Option<String>,
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    pub url: String,
}

/// Counts arrive as decimal strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelStatistics {
    pub view_count: Option<String>,
    pub subscriber_count: Option<String>,
    pub video_count: Option<String>,
    pub hidden_subscriber_count: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelatedPlaylists {
    pub uploads: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BrandingSettings {
    pub channel: Option<ChannelBranding>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelBranding {
    pub keywords: Option<String>,
    pub feature: Option<String>,
    pub unsubscribed_trailer: Option<String>,
}

/// Canonical watch URL for a video.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    // Matches various YouTube URL formats and bare video IDs
    Regex::new(
        r"(?x)
        (?:
            (?:https?://)?
            (?:www\.|m\.)?
            (?:youtube\.com/watch\?(?:.*&)?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/shorts/)
            ([a-zA-Z0-9_-]{11})
        )
        |
        ^([a-zA-Z0-9_-]{11})$
    ",
    )
    .expect("Invalid regex")
});

/// Extract a video id from a watch/short/embed URL or a bare 11-character id.
pub fn extract_video_id(input: &str) -> Option<String> {
    let caps = VIDEO_ID.captures(input.trim())?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}
