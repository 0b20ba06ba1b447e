//! `analyze_channel`: content-nature report over a channel's recent uploads.

use super::{require, separator, ChannelArgs};
use crate::analysis::text::truncate_chars;
use crate::analysis::{summarize, ThemeScanner};
use crate::error::Result;
use crate::youtube::{watch_url, VideoPlatform};
use std::fmt::Write;
use tracing::debug;

const DEFAULT_MAX_VIDEOS: u32 = 50;
const SUMMARY_INPUT_CHARS: usize = 3000;
const SAMPLE_SUMMARIES: usize = 5;

struct VideoSummary {
    video_id: String,
    title: String,
    summary: String,
}

pub async fn handle(args: &ChannelArgs, platform: &dyn VideoPlatform) -> Result<String> {
    let channel_id = require("channelId", &args.channel_id)?;
    let max_videos = args.max_videos.unwrap_or(DEFAULT_MAX_VIDEOS);

    let videos = platform.get_channel_videos(channel_id, max_videos).await?;
    if videos.is_empty() {
        return Ok(format!("No videos found for channel: {}", channel_id));
    }

    let mut scanner = ThemeScanner::new();
    let mut summaries = Vec::new();
    for video in &videos {
        let Some(video_id) = video.video_id() else {
            continue;
        };

        let transcript = match platform.get_transcript(video_id).await {
            Ok(t) => t,
            Err(e) => {
                debug!("Skipping {} in channel analysis: {}", video_id, e);
                continue;
            }
        };

        summaries.push(VideoSummary {
            video_id: video_id.to_string(),
            title: video.snippet.title.clone(),
            summary: summarize(truncate_chars(&transcript, SUMMARY_INPUT_CHARS)),
        });
        scanner.scan(&transcript);
    }

    let rule = separator();
    let summary_lengths: Vec<usize> = summaries.iter().map(|s| s.summary.chars().count()).collect();

    let mut output = format!("Channel Content Analysis\n\n{}\n\n", rule);
    let _ = write!(output, "Analyzing {} videos from channel...\n\n", videos.len());
    let _ = write!(output, "Total Videos Analyzed: {}\n\n", summaries.len());
    output.push_str(&scanner.report(&summary_lengths));
    let _ = write!(output, "\n{}\n\n", rule);

    output.push_str("Sample Video Summaries:\n\n");
    for (index, video) in summaries.iter().take(SAMPLE_SUMMARIES).enumerate() {
        let _ = writeln!(output, "{}. {}", index + 1, video.title);
        let _ = writeln!(output, "   {}", video.summary);
        let _ = write!(output, "   Link: {}\n\n", watch_url(&video.video_id));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::fake::{playlist_item, FakePlatform};
    use crate::youtube::ChannelInfo;

    fn args(max_videos: Option<u32>) -> ChannelArgs {
        ChannelArgs {
            channel_id: Some("UCbuilders".to_string()),
            max_videos,
            api_key: None,
        }
    }

    fn channel_with(videos: Vec<crate::youtube::PlaylistItem>) -> FakePlatform {
        FakePlatform {
            channel: Some(ChannelInfo::default()),
            channel_videos: videos,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_channel_does_no_per_video_work() {
        let platform = channel_with(Vec::new());
        let text = handle(&args(None), &platform).await.unwrap();

        assert_eq!(text, "No videos found for channel: UCbuilders");
        assert_eq!(platform.calls(), vec!["videos:UCbuilders"]);
    }

    #[tokio::test]
    async fn test_skips_missing_ids_and_failed_transcripts() {
        let platform = channel_with(vec![
            playlist_item(Some("vid00000001"), "Tutorial one"),
            playlist_item(None, "Deleted video"),
            playlist_item(Some("vid00000002"), "No captions"),
            playlist_item(Some("vid00000003"), "Review two"),
        ])
        .with_transcript("vid00000001", "A quick tutorial on tools.")
        .with_transcript("vid00000003", "An honest review of the best tool.");

        let text = handle(&args(None), &platform).await.unwrap();

        assert!(text.starts_with("Channel Content Analysis\n\n"));
        assert!(text.contains("Analyzing 4 videos from channel...\n\n"));
        assert!(text.contains("Total Videos Analyzed: 2\n\n"));
        assert!(text.contains("- tool (appears 2 times)"));
        assert!(text.contains("Content Type: Tutorial/Educational, Reviews"));
        assert!(text.contains("1. Tutorial one\n   A quick tutorial on tools.\n"));
        assert!(text.contains("2. Review two\n"));
        assert!(text.contains("Link: https://www.youtube.com/watch?v=vid00000003"));
        assert!(!text.contains("No captions"));

        assert_eq!(
            platform.calls(),
            vec![
                "videos:UCbuilders",
                "transcript:vid00000001",
                "transcript:vid00000002",
                "transcript:vid00000003",
            ]
        );
    }

    #[tokio::test]
    async fn test_all_transcripts_failing_reports_zero_depth() {
        let platform = channel_with(vec![playlist_item(Some("vid00000001"), "Silent")]);
        let text = handle(&args(None), &platform).await.unwrap();

        assert!(text.contains("Total Videos Analyzed: 0"));
        assert!(text.contains("Average content depth: 0 characters per summary."));
        assert!(text.ends_with("Sample Video Summaries:\n\n"));
    }

    #[tokio::test]
    async fn test_lookup_failure_aborts() {
        let platform = FakePlatform::default();
        let err = handle(&args(None), &platform).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to get channel videos"));
    }

    #[tokio::test]
    async fn test_is_idempotent() {
        let platform = channel_with(vec![playlist_item(Some("vid00000001"), "One")])
            .with_transcript("vid00000001", "We learn how to guide a team through a hard launch.");

        let first = handle(&args(Some(10)), &platform).await.unwrap();
        let second = handle(&args(Some(10)), &platform).await.unwrap();
        assert_eq!(first, second);
    }
}
