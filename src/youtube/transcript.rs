//! Caption-based transcript retrieval.
//!
//! Reads the caption track list embedded in a video's watch page and downloads the
//! timed-text XML of the best matching track.

use crate::error::{Result, ScoutError};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::{debug, instrument};
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

static CAPTION_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<text start="([^"]*)" dur="([^"]*)"[^>]*>([^<]*)</text>"#).expect("Invalid regex")
});

static NUMERIC_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").expect("Invalid regex"));

/// One timed caption line.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionSegment {
    pub start_seconds: f64,
    pub duration_seconds: f64,
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    #[serde(default)]
    language_code: String,
}

/// Fetches captions from the public watch page.
#[derive(Clone)]
pub struct TranscriptFetcher {
    http: reqwest::Client,
    watch_base: Url,
    language: String,
}

impl TranscriptFetcher {
    pub fn new(http: reqwest::Client, watch_base: Url, language: &str) -> Self {
        Self {
            http,
            watch_base,
            language: language.to_string(),
        }
    }

    /// Fetch the caption segments of a video.
    #[instrument(skip(self))]
    pub async fn fetch_segments(&self, video_id: &str) -> Result<Vec<CaptionSegment>> {
        let mut page_url = self.watch_base.join("watch")?;
        page_url.query_pairs_mut().append_pair("v", video_id);

        let html = self
            .http
            .get(page_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT_LANGUAGE, &self.language)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        if html.contains("class=\"g-recaptcha\"") {
            return Err(ScoutError::UpstreamFetch(
                "YouTube is receiving too many requests from this IP and now requires solving a captcha"
                    .to_string(),
            ));
        }

        let tracks = parse_caption_tracks(&html, video_id)?;
        let track = pick_track(&tracks, &self.language).ok_or_else(|| {
            ScoutError::UpstreamFetch(format!(
                "No transcripts are available for this video ({})",
                video_id
            ))
        })?;
        debug!("Using caption track '{}'", track.language_code);

        let xml = self
            .http
            .get(&track.base_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(parse_caption_xml(&xml))
    }

    /// Fetch captions joined into one transcript string.
    pub async fn fetch_text(&self, video_id: &str) -> Result<String> {
        let segments = self.fetch_segments(video_id).await?;
        Ok(segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string())
    }
}

/// Pull the caption track list out of a watch page.
fn parse_caption_tracks(html: &str, video_id: &str) -> Result<Vec<CaptionTrack>> {
    let captions_json = html
        .split_once("\"captions\":")
        .and_then(|(_, rest)| rest.split_once(",\"videoDetails").map(|(json, _)| json))
        .ok_or_else(|| {
            ScoutError::UpstreamFetch(format!(
                "Transcript is disabled on this video ({})",
                video_id
            ))
        })?;

    let captions: serde_json::Value = serde_json::from_str(captions_json)?;
    let tracks = captions
        .pointer("/playerCaptionsTracklistRenderer/captionTracks")
        .cloned()
        .ok_or_else(|| {
            ScoutError::UpstreamFetch(format!(
                "No transcripts are available for this video ({})",
                video_id
            ))
        })?;

    Ok(serde_json::from_value(tracks)?)
}

/// Prefer a track in `language`, else the first one listed.
fn pick_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> Option<&'a CaptionTrack> {
    let wanted = language.split(['-', '_']).next().unwrap_or(language);
    tracks
        .iter()
        .find(|t| t.language_code.starts_with(wanted))
        .or_else(|| tracks.first())
}

fn parse_caption_xml(xml: &str) -> Vec<CaptionSegment> {
    CAPTION_TEXT
        .captures_iter(xml)
        .map(|caps| CaptionSegment {
            start_seconds: caps[1].parse().unwrap_or(0.0),
            duration_seconds: caps[2].parse().unwrap_or(0.0),
            text: decode_entities(&caps[3]),
        })
        .filter(|s| !s.text.is_empty())
        .collect()
}

/// Decode the XML/HTML entities found in timed-text captions.
///
/// Caption text is often double-escaped (`&amp;#39;`), so `&amp;` is decoded both
/// before and after the other entities.
fn decode_entities(text: &str) -> String {
    let text = text.replace("&amp;", "&");
    let text = NUMERIC_ENTITY.replace_all(&text, |caps: &regex::Captures| {
        let code = &caps[1];
        let value = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse().ok(),
        };
        value
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    text.replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .replace('\n', " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATCH_PAGE: &str = r#"<script>var ytInitialPlayerResponse = {"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=x&lang=de","name":{"simpleText":"German"},"languageCode":"de"},{"baseUrl":"https://www.youtube.com/api/timedtext?v=x&lang=en","name":{"runs":[{"text":"English"}]},"languageCode":"en"}]}},"videoDetails":{"videoId":"x"}};</script>"#;

    #[test]
    fn test_parse_caption_tracks() {
        let tracks = parse_caption_tracks(WATCH_PAGE, "x").unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[1].language_code, "en");
    }

    #[test]
    fn test_pick_track_prefers_language() {
        let tracks = parse_caption_tracks(WATCH_PAGE, "x").unwrap();
        assert_eq!(pick_track(&tracks, "en-US").unwrap().language_code, "en");
        assert_eq!(pick_track(&tracks, "fr").unwrap().language_code, "de");
        assert!(pick_track(&[], "en").is_none());
    }

    #[test]
    fn test_missing_captions_is_fetch_error() {
        let err = parse_caption_tracks("<html>no captions</html>", "vid").unwrap_err();
        assert!(matches!(err, ScoutError::UpstreamFetch(_)));
        assert!(err.to_string().contains("disabled"));
    }

    #[test]
    fn test_parse_caption_xml() {
        let xml = r#"<?xml version="1.0" encoding="utf-8" ?><transcript>
            <text start="0.5" dur="2.1">Hello &amp;amp; welcome</text>
            <text start="2.6" dur="1.9">it&amp;#39;s &lt;great&gt;</text>
            <text start="4.5" dur="1.0"></text>
        </transcript>"#;

        let segments = parse_caption_xml(xml);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start_seconds, 0.5);
        assert_eq!(segments[0].text, "Hello & welcome");
        assert_eq!(segments[1].text, "it's <great>");
    }

    #[test]
    fn test_decode_numeric_entities() {
        assert_eq!(decode_entities("caf&#233; &#x2764;"), "café ❤");
        assert_eq!(decode_entities("bad &#99999999; code"), "bad &#99999999; code");
    }
}
