//! YouTube Data API v3 client.

use super::transcript::TranscriptFetcher;
use super::{ChannelInfo, PlaylistItem, SearchItem, VideoPlatform};
use crate::config::YoutubeSettings;
use crate::error::{Result, ScoutError};
use async_trait::async_trait;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Transcripts shorter than this are replaced by the video description.
const MIN_TRANSCRIPT_CHARS: usize = 20;

/// The API never returns more than one page of this size.
const MAX_PAGE_SIZE: u32 = 50;

static QUERY_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[$"']"#).expect("Invalid regex"));

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VideoResource {
    snippet: VideoSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VideoSnippet {
    description: String,
}

/// Client for one API key.
pub struct YoutubeClient {
    http: reqwest::Client,
    api_key: String,
    api_base: Url,
    transcripts: TranscriptFetcher,
}

impl YoutubeClient {
    /// Create a client with default endpoints.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_settings(api_key, &YoutubeSettings::default())
    }

    /// Create a client using configured endpoints and timeouts.
    pub fn with_settings(api_key: &str, settings: &YoutubeSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        // A trailing slash keeps `join` from replacing the last path segment.
        let api_base = with_trailing_slash(&settings.api_base_url)?;
        let watch_base = with_trailing_slash(&settings.watch_base_url)?;
        let transcripts =
            TranscriptFetcher::new(http.clone(), watch_base, &settings.transcript_language);

        Ok(Self {
            transcripts,
            http,
            api_key: api_key.to_string(),
            api_base,
        })
    }

    /// GET an API resource and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let mut url = self.api_base.join(resource)?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair("key", &self.api_key);
        }

        let response = self.http.get(url).send().await.map_err(redact_url)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoutError::UpstreamStatus {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        response.json().await.map_err(redact_url)
    }

    async fn search_once(&self, query: &str, max_results: u32) -> Result<Vec<SearchItem>> {
        let params = [
            ("part", "snippet".to_string()),
            ("q", query.to_string()),
            ("type", "video".to_string()),
            ("maxResults", max_results.to_string()),
        ];
        let response: ListResponse<SearchItem> = self.get_json("search", &params).await?;
        Ok(response.items)
    }
}

fn with_trailing_slash(base: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{}/", base.trim_end_matches('/')))?)
}

/// Strip characters the search endpoint tends to reject.
fn simplify_query(query: &str) -> String {
    let stripped = QUERY_NOISE.replace_all(query, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The request URL carries the API key, so it never goes into an error.
fn redact_url(err: reqwest::Error) -> ScoutError {
    ScoutError::Http(err.without_url())
}

fn is_bad_request(err: &ScoutError) -> bool {
    match err {
        ScoutError::UpstreamStatus { status, .. } => *status == 400,
        ScoutError::Http(e) => e.status() == Some(reqwest::StatusCode::BAD_REQUEST),
        _ => false,
    }
}

#[async_trait]
impl VideoPlatform for YoutubeClient {
    #[instrument(skip(self))]
    async fn get_transcript(&self, video_id: &str) -> Result<String> {
        match self.transcripts.fetch_text(video_id).await {
            Ok(transcript) if transcript.chars().count() >= MIN_TRANSCRIPT_CHARS => Ok(transcript),
            Ok(_) => {
                debug!("Transcript for {} is empty, using description", video_id);
                Ok(self.get_video_description(video_id).await?.unwrap_or_default())
            }
            Err(e) => {
                warn!("Transcript fetch for {} failed: {}", video_id, e);
                match self.get_video_description(video_id).await {
                    Ok(Some(description)) => Ok(description),
                    _ => Err(ScoutError::UpstreamFetch(format!(
                        "Failed to fetch transcript: {}",
                        e
                    ))),
                }
            }
        }
    }

    #[instrument(skip(self))]
    async fn search_videos(&self, query: &str, max_results: u32) -> Result<Vec<SearchItem>> {
        let max_results = max_results.clamp(1, MAX_PAGE_SIZE);
        match self.search_once(query, max_results).await {
            Ok(items) => Ok(items),
            Err(e) => {
                if is_bad_request(&e) {
                    let simplified = simplify_query(query);
                    if !simplified.is_empty() && simplified != query {
                        debug!("Retrying search with simplified query '{}'", simplified);
                        if let Ok(items) = self.search_once(&simplified, max_results).await {
                            return Ok(items);
                        }
                    }
                }
                Err(ScoutError::UpstreamFetch(format!("Failed to search videos: {}", e)))
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_channel_info(&self, channel_id: &str) -> Result<ChannelInfo> {
        let params = [
            ("part", "snippet,statistics,contentDetails,brandingSettings".to_string()),
            ("id", channel_id.to_string()),
        ];

        let response: ListResponse<ChannelInfo> = self
            .get_json("channels", &params)
            .await
            .map_err(|e| ScoutError::UpstreamLookup(format!("Failed to get channel info: {}", e)))?;

        response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| {
                ScoutError::UpstreamLookup(
                    "Failed to get channel info: Channel not found".to_string(),
                )
            })
    }

    #[instrument(skip(self))]
    async fn get_channel_videos(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistItem>> {
        let wrap = |e: ScoutError| {
            ScoutError::UpstreamLookup(format!("Failed to get channel videos: {}", e))
        };

        let channel = self.get_channel_info(channel_id).await.map_err(wrap)?;
        let uploads = channel
            .content_details
            .related_playlists
            .uploads
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                wrap(ScoutError::UpstreamLookup(
                    "Could not find uploads playlist for channel".to_string(),
                ))
            })?;

        let params = [
            ("part", "snippet,contentDetails".to_string()),
            ("playlistId", uploads),
            ("maxResults", max_results.clamp(1, MAX_PAGE_SIZE).to_string()),
        ];
        let response: ListResponse<PlaylistItem> =
            self.get_json("playlistItems", &params).await.map_err(wrap)?;

        Ok(response.items)
    }

    async fn get_video_description(&self, video_id: &str) -> Result<Option<String>> {
        let params = [("part", "snippet".to_string()), ("id", video_id.to_string())];
        let lookup = self.get_json::<ListResponse<VideoResource>>("videos", &params);
        let description = match lookup.await {
            Ok(response) => response
                .items
                .into_iter()
                .next()
                .map(|v| v.snippet.description.trim().to_string())
                .filter(|d| !d.is_empty()),
            Err(e) => {
                debug!("Description lookup for {} failed: {}", video_id, e);
                None
            }
        };
        Ok(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_query() {
        assert_eq!(
            simplify_query("How I built a $10k/month business \"USA\""),
            "How I built a 10k/month business USA"
        );
        assert_eq!(simplify_query("  it's   fine "), "its fine");
    }

    #[test]
    fn test_is_bad_request() {
        let status = |status| ScoutError::UpstreamStatus {
            status,
            body: "{}".to_string(),
        };
        assert!(is_bad_request(&status(400)));
        assert!(!is_bad_request(&status(403)));

        let reworded = ScoutError::UpstreamFetch("status code 400".to_string());
        assert!(!is_bad_request(&reworded));
        assert_eq!(
            status(400).to_string(),
            "Request failed with status code 400. Response: {}"
        );
    }

    #[tokio::test]
    async fn test_transport_errors_do_not_reveal_key() {
        let key = "AIzaSyHiddenKey-00000000000000000000";
        let mut settings = YoutubeSettings::default();
        // Nothing listens on the discard port.
        settings.api_base_url = "http://127.0.0.1:9/youtube/v3".to_string();
        settings.request_timeout_secs = 2;
        let client = YoutubeClient::with_settings(key, &settings).unwrap();

        let err = client.search_videos("rust", 5).await.unwrap_err().to_string();
        assert!(err.starts_with("Failed to search videos: HTTP error"));
        assert!(!err.contains(key));

        let err = client.get_channel_info("UC123").await.unwrap_err().to_string();
        assert!(!err.contains(key));
    }

    #[test]
    fn test_client_builds_from_settings() {
        let mut settings = YoutubeSettings::default();
        settings.api_base_url = "http://localhost:9999/youtube/v3/".to_string();
        let client = YoutubeClient::with_settings("k".repeat(39).as_str(), &settings).unwrap();
        assert_eq!(
            client.api_base.join("search").unwrap().as_str(),
            "http://localhost:9999/youtube/v3/search"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let mut settings = YoutubeSettings::default();
        settings.api_base_url = "not a url".to_string();
        assert!(matches!(
            YoutubeClient::with_settings("key", &settings),
            Err(ScoutError::Url(_))
        ));
    }

    #[test]
    fn test_list_response_tolerates_missing_items() {
        let response: ListResponse<SearchItem> = serde_json::from_str(r#"{"kind": "x"}"#).unwrap();
        assert!(response.items.is_empty());
    }
}
