//! Error types for tubescout.

use thiserror::Error;

/// Library-level error type for tubescout operations.
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("{0} parameter is required")]
    MissingParameter(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A single item's fetch failed. Aggregate tools recover from this per item.
    #[error("{0}")]
    UpstreamFetch(String),

    /// The API answered with a non-success status.
    #[error("Request failed with status code {status}. Response: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// A precondition lookup failed (channel, uploads playlist). Aborts the whole call.
    #[error("{0}")]
    UpstreamLookup(String),

    #[error("{0}")]
    CredentialInvalid(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for tubescout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;
