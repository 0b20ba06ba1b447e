//! `get_summary`: an extractive summary of one video.

use super::VideoArgs;
use crate::analysis::summarize;
use crate::error::Result;
use crate::youtube::VideoPlatform;

pub async fn handle(args: &VideoArgs, platform: &dyn VideoPlatform) -> Result<String> {
    let video_id = args.require_video_id()?;
    let transcript = platform.get_transcript(&video_id).await?;
    Ok(format!("Summary for video {}:\n\n{}", video_id, summarize(&transcript)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::youtube::fake::FakePlatform;

    #[tokio::test]
    async fn test_short_transcript_is_verbatim() {
        let platform =
            FakePlatform::default().with_transcript("abcdefghijk", "  Just   a short clip.  ");
        let args = VideoArgs {
            video_id: Some("https://www.youtube.com/watch?v=abcdefghijk".to_string()),
            api_key: None,
        };

        let text = handle(&args, &platform).await.unwrap();
        assert_eq!(text, "Summary for video abcdefghijk:\n\nJust a short clip.");
    }

    #[tokio::test]
    async fn test_missing_video_id() {
        let platform = FakePlatform::default();
        let err = handle(&VideoArgs::default(), &platform).await.unwrap_err();
        assert_eq!(err.to_string(), "videoId parameter is required");
        assert!(platform.calls().is_empty());
    }
}
