//! `get_transcript`: the full transcript of one video.

use super::VideoArgs;
use crate::error::Result;
use crate::youtube::VideoPlatform;

pub async fn handle(args: &VideoArgs, platform: &dyn VideoPlatform) -> Result<String> {
    let video_id = args.require_video_id()?;
    let transcript = platform.get_transcript(&video_id).await?;
    Ok(format!("Transcript for video {}:\n\n{}", video_id, transcript))
}
