//! `search_videos`: search results annotated with transcript excerpts and summaries.

use super::{require, separator, SearchArgs};
use crate::analysis::summarize;
use crate::analysis::text::truncate_chars;
use crate::error::Result;
use crate::youtube::{watch_url, SearchItem, VideoPlatform};
use std::fmt::Write;
use tracing::{debug, warn};

const DEFAULT_MAX_RESULTS: u32 = 5;
const MAX_RESULTS_LIMIT: u32 = 50;

const DESCRIPTION_CHARS: usize = 200;
const FALLBACK_SUMMARY_CHARS: usize = 300;
const EXCERPT_CHARS: usize = 500;
const SUMMARY_INPUT_CHARS: usize = 5000;

/// One rendered search hit.
struct SearchResult<'a> {
    video_id: &'a str,
    item: &'a SearchItem,
    excerpt: String,
    summary: String,
    note: Option<String>,
}

async fn analyze<'a>(
    video_id: &'a str,
    item: &'a SearchItem,
    platform: &dyn VideoPlatform,
) -> SearchResult<'a> {
    match platform.get_transcript(video_id).await {
        Ok(transcript) => SearchResult {
            video_id,
            item,
            excerpt: truncate_chars(&transcript, EXCERPT_CHARS).to_string(),
            summary: summarize(truncate_chars(&transcript, SUMMARY_INPUT_CHARS)),
            note: None,
        },
        Err(e) => {
            warn!("No transcript for search result {}: {}", video_id, e);
            SearchResult {
                video_id,
                item,
                excerpt: "Transcript unavailable".to_string(),
                summary: truncate_chars(&item.snippet.description, FALLBACK_SUMMARY_CHARS)
                    .to_string(),
                note: Some(format!("Failed to get transcript: {}", e)),
            }
        }
    }
}

pub async fn handle(args: &SearchArgs, platform: &dyn VideoPlatform) -> Result<String> {
    let query = require("query", &args.query)?;
    let max_results = args
        .max_results
        .unwrap_or(DEFAULT_MAX_RESULTS)
        .clamp(1, MAX_RESULTS_LIMIT);

    let items = platform.search_videos(query, max_results).await?;
    if items.is_empty() {
        return Ok(format!("No videos found for query: \"{}\"", query));
    }

    let mut results = Vec::with_capacity(items.len());
    for item in &items {
        let Some(video_id) = item.video_id() else {
            debug!("Skipping search result without a video id: {}", item.snippet.title);
            continue;
        };
        results.push(analyze(video_id, item, platform).await);
    }

    let rule = separator();
    let mut output = format!("Search Results for: \"{}\"\n\n{}\n\n", query, rule);
    for (index, result) in results.iter().enumerate() {
        let snippet = &result.item.snippet;
        let _ = writeln!(output, "Result {}:", index + 1);
        let _ = writeln!(output, "Title: {}", snippet.title);
        let _ = writeln!(output, "Channel: {}", snippet.channel_title);
        let _ = writeln!(output, "Published: {}", snippet.published_at.as_deref().unwrap_or("N/A"));
        let _ = writeln!(output, "Link: {}", watch_url(result.video_id));
        let _ = write!(
            output,
            "\nDescription:\n{}\n\n",
            truncate_chars(&snippet.description, DESCRIPTION_CHARS)
        );
        let _ = write!(output, "Transcript (excerpt):\n{}...\n\n", result.excerpt);
        let _ = write!(output, "Summary:\n{}\n\n", result.summary);
        if let Some(note) = &result.note {
            let _ = writeln!(output, "Note: {}", note);
        }
        let _ = write!(output, "{}\n\n", rule);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::fake::{search_item, FakePlatform};

    fn args(query: &str, max_results: Option<u32>) -> SearchArgs {
        SearchArgs {
            query: Some(query.to_string()),
            max_results,
            api_key: None,
        }
    }

    #[tokio::test]
    async fn test_no_results() {
        let platform = FakePlatform::default();
        let text = handle(&args("rust async", None), &platform).await.unwrap();
        assert_eq!(text, "No videos found for query: \"rust async\"");
    }

    #[tokio::test]
    async fn test_renders_results_in_order_with_failure_note() {
        let mut platform =
            FakePlatform::default().with_transcript("vid00000001", "A short transcript.");
        platform.search_results = vec![
            search_item(Some("vid00000001"), "First", "Chan A", "first description"),
            search_item(None, "Playlist hit", "Chan B", "ignored"),
            search_item(Some("vid00000002"), "Second", "Chan C", &"d".repeat(400)),
        ];

        let text = handle(&args("rust", Some(10)), &platform).await.unwrap();

        assert!(text.starts_with("Search Results for: \"rust\"\n\n"));
        let first = text.find("Result 1:\nTitle: First").unwrap();
        let second = text.find("Result 2:\nTitle: Second").unwrap();
        assert!(first < second);
        assert!(!text.contains("Playlist hit"));
        assert!(!text.contains("Result 3:"));

        assert!(text.contains("Link: https://www.youtube.com/watch?v=vid00000001"));
        assert!(text.contains("Transcript (excerpt):\nA short transcript....\n\n"));
        assert!(text.contains("Transcript (excerpt):\nTranscript unavailable...\n\n"));
        assert!(text.contains(&format!("Summary:\n{}\n\n", "d".repeat(300))));
        assert!(text.contains("Note: Failed to get transcript: Failed to fetch transcript"));

        assert_eq!(
            platform.calls(),
            vec!["search:rust", "transcript:vid00000001", "transcript:vid00000002"]
        );
    }

    #[tokio::test]
    async fn test_missing_query() {
        let platform = FakePlatform::default();
        let err = handle(&SearchArgs::default(), &platform).await.unwrap_err();
        assert_eq!(err.to_string(), "query parameter is required");
    }

    #[tokio::test]
    async fn test_max_results_is_clamped() {
        let mut platform = FakePlatform::default();
        platform.search_results = (0..3)
            .map(|i| search_item(Some(&format!("vid0000000{}", i)), "t", "c", "d"))
            .collect();

        let text = handle(&args("q", Some(0)), &platform).await.unwrap();
        assert!(text.contains("Result 1:"));
        assert!(!text.contains("Result 2:"));
    }
}
