//! `get_channel_info`: channel metadata and statistics.

use super::{require, separator, ChannelArgs};
use crate::error::Result;
use crate::youtube::VideoPlatform;
use std::fmt::Write;

const NOT_AVAILABLE: &str = "N/A";

/// Format a decimal count string with thousands separators.
///
/// Missing or unparsable counts render as 0.
fn format_count(raw: Option<&str>) -> String {
    let value: u64 = raw.and_then(|r| r.trim().parse().ok()).unwrap_or(0);
    let digits = value.to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE)
}

pub async fn handle(args: &ChannelArgs, platform: &dyn VideoPlatform) -> Result<String> {
    let channel_id = require("channelId", &args.channel_id)?;
    let channel = platform.get_channel_info(channel_id).await?;
    let snippet = &channel.snippet;
    let stats = &channel.statistics;

    let mut output = format!("Channel Information\n\n{}\n\n", separator());
    let _ = writeln!(output, "Channel ID: {}", channel_id);
    let _ = writeln!(output, "Title: {}", snippet.title);
    let _ = writeln!(output, "Description: {}", or_na(Some(snippet.description.as_str())));
    let _ = writeln!(output, "Custom URL: {}", or_na(snippet.custom_url.as_deref()));
    let _ = writeln!(output, "Published At: {}", or_na(snippet.published_at.as_deref()));
    let _ = writeln!(output, "Country: {}", or_na(snippet.country.as_deref()));

    output.push_str("\nStatistics:\n");
    let _ = writeln!(output, "- View Count: {}", format_count(stats.view_count.as_deref()));
    let subscribers = format_count(stats.subscriber_count.as_deref());
    let _ = writeln!(output, "- Subscriber Count: {}", subscribers);
    let _ = writeln!(output, "- Video Count: {}", format_count(stats.video_count.as_deref()));
    let _ = writeln!(
        output,
        "- Hidden Subscriber Count: {}",
        if stats.hidden_subscriber_count { "Yes" } else { "No" }
    );

    if let Some(branding) = &channel.branding_settings.channel {
        output.push_str("\nChannel Branding:\n");
        let _ = writeln!(output, "- Keywords: {}", or_na(branding.keywords.as_deref()));
        let _ = writeln!(output, "- Feature: {}", or_na(branding.feature.as_deref()));
        let _ = writeln!(
            output,
            "- Unsubscribed Trailer: {}",
            or_na(branding.unsubscribed_trailer.as_deref())
        );
    }

    if let Some(thumbnails) = &snippet.thumbnails {
        output.push('\n');
        if let Some(high) = &thumbnails.high {
            let _ = writeln!(output, "Channel Thumbnail: {}", high.url);
        }
        if let Some(default) = &thumbnails.default {
            let _ = writeln!(output, "Channel Banner: {}", default.url);
        }
    }

    let _ = writeln!(output, "\nChannel URL: https://www.youtube.com/channel/{}", channel_id);
    Ok(output)
}
