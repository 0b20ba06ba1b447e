//! In-memory `VideoPlatform` for composer tests.

use super::{ChannelInfo, PlaylistItem, ResourceId, SearchItem, Snippet, VideoPlatform};
use crate::error::{Result, ScoutError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakePlatform {
    pub transcripts: HashMap<String, String>,
    pub search_results: Vec<SearchItem>,
    pub channel: Option<ChannelInfo>,
    pub channel_videos: Vec<PlaylistItem>,
    /// Every call, in order, as "method:argument".
    pub calls: Mutex<Vec<String>>,
}

impl FakePlatform {
    pub fn with_transcript(mut self, video_id: &str, transcript: &str) -> Self {
        self.transcripts.insert(video_id.to_string(), transcript.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn search_item(
    video_id: Option<&str>,
    title: &str,
    channel: &str,
    description: &str,
) -> SearchItem {
    SearchItem {
        id: ResourceId {
            video_id: video_id.map(str::to_string),
        },
        snippet: Snippet {
            title: title.to_string(),
            description: description.to_string(),
            channel_title: channel.to_string(),
            published_at: Some("2024-01-15T10:00:00Z".to_string()),
            resource_id: None,
        },
    }
}

pub fn playlist_item(video_id: Option<&str>, title: &str) -> PlaylistItem {
    PlaylistItem {
        snippet: Snippet {
            title: title.to_string(),
            ..Default::default()
        },
        content_details: Some(ResourceId {
            video_id: video_id.map(str::to_string),
        }),
    }
}

#[async_trait]
impl VideoPlatform for FakePlatform {
    async fn get_transcript(&self, video_id: &str) -> Result<String> {
        self.record(format!("transcript:{}", video_id));
        self.transcripts.get(video_id).cloned().ok_or_else(|| {
            ScoutError::UpstreamFetch(
                "Failed to fetch transcript: Transcript is disabled on this video".to_string(),
            )
        })
    }

    async fn search_videos(&self, query: &str, max_results: u32) -> Result<Vec<SearchItem>> {
        self.record(format!("search:{}", query));
        Ok(self.search_results.iter().take(max_results as usize).cloned().collect())
    }

    async fn get_channel_info(&self, channel_id: &str) -> Result<ChannelInfo> {
        self.record(format!("channel:{}", channel_id));
        self.channel.clone().ok_or_else(|| {
            ScoutError::UpstreamLookup("Failed to get channel info: Channel not found".to_string())
        })
    }

    async fn get_channel_videos(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistItem>> {
        self.record(format!("videos:{}", channel_id));
        if self.channel.is_none() {
            return Err(ScoutError::UpstreamLookup(
                "Failed to get channel videos: Failed to get channel info: Channel not found".to_string(),
            ));
        }
        Ok(self.channel_videos.iter().take(max_results as usize).cloned().collect())
    }

    async fn get_video_description(&self, video_id: &str) -> Result<Option<String>> {
        self.record(format!("description:{}", video_id));
        Ok(None)
    }
}
