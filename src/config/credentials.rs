//! API key cleanup and validation.

use crate::error::{Result, ScoutError};

/// Keys shorter than this are rejected outright. Data API keys are 39 characters.
pub const MIN_API_KEY_LEN: usize = 20;

/// Strip whitespace, a leading byte-order mark and surrounding quotes.
///
/// Keys pasted into `.env` files or client configs often carry all three.
pub fn clean_api_key(raw: &str) -> String {
    raw.trim()
        .trim_start_matches('\u{feff}')
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}

/// Reject missing or implausibly short keys with a diagnostic that never echoes the key.
pub fn validate_api_key(key: Option<&str>, configured: Option<&str>) -> Result<()> {
    let key = key.unwrap_or_default();
    if key.chars().count() >= MIN_API_KEY_LEN {
        return Ok(());
    }

    let diagnostic = if key.is_empty() {
        "No API key found".to_string()
    } else {
        format!("Found key with length {} (starts with: {}...)", key.chars().count(), preview(key))
    };
    let environment = match configured {
        Some(k) if !k.is_empty() => format!("Configured key has length {}", k.chars().count()),
        _ => "No key configured".to_string(),
    };

    Err(ScoutError::CredentialInvalid(format!(
        "API key required and must be valid (minimum {} characters).\n\
         Diagnostic: {}\n\
         Environment: {}\n\
         Pass apiKey in the tool arguments, set YOUTUBE_API_KEY (no quotes, no spaces around =), \
         or set youtube.api_key in the config file.",
        MIN_API_KEY_LEN, diagnostic, environment
    )))
}

fn preview(key: &str) -> String {
    key.chars().take(4).collect()
}
