//! Configuration settings for tubescout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub youtube: YoutubeSettings,
    pub server: ServerSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Extra `.env` file to load before reading the environment.
    pub env_file: Option<String>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            env_file: None,
        }
    }
}

/// YouTube access settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// YouTube Data API v3 key. Overridden by `YOUTUBE_API_KEY`.
    pub api_key: Option<String>,
    /// Base URL of the Data API.
    pub api_base_url: String,
    /// Base URL of the public site, used for caption scraping.
    pub watch_base_url: String,
    /// Preferred caption language.
    pub transcript_language: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Maximum number of per-key clients kept alive.
    pub client_cache_capacity: usize,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            watch_base_url: "https://www.youtube.com".to_string(),
            transcript_language: "en".to_string(),
            request_timeout_secs: 30,
            client_cache_capacity: 16,
        }
    }
}

/// Transport used by the MCP server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServerMode {
    /// JSON-RPC over stdin/stdout (default).
    #[default]
    Stdio,
    /// JSON-RPC over HTTP POST.
    Http,
}

impl std::str::FromStr for ServerMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdio" => Ok(ServerMode::Stdio),
            "http" => Ok(ServerMode::Http),
            _ => Err(format!("Unknown server mode: {}", s)),
        }
    }
}

impl std::fmt::Display for ServerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerMode::Stdio => write!(f, "stdio"),
            ServerMode::Http => write!(f, "http"),
        }
    }
}

/// MCP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Transport mode. Overridden by `MCP_SERVER_MODE`.
    pub mode: ServerMode,
    /// Host to bind in HTTP mode.
    pub host: String,
    /// Port to bind in HTTP mode. Overridden by `MCP_SERVER_PORT`.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            mode: ServerMode::Stdio,
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Load the configured `.env` file (if any), then apply environment overrides.
    pub fn with_env(mut self) -> Self {
        if let Some(env_file) = &self.general.env_file {
            let path = Self::expand_path(env_file);
            match dotenvy::from_path(&path) {
                Ok(()) => debug!("Loaded environment from {}", path.display()),
                Err(e) => warn!("Could not load env file {}: {}", path.display(), e),
            }
        }

        self.apply_overrides(|name| std::env::var(name).ok());
        self
    }

    /// Apply overrides from a variable lookup.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("YOUTUBE_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.youtube.api_key = Some(key);
        }

        if let Some(mode) = lookup("MCP_SERVER_MODE") {
            match mode.parse() {
                Ok(mode) => self.server.mode = mode,
                Err(e) => warn!("Ignoring MCP_SERVER_MODE: {}", e),
            }
        }

        if let Some(port) = lookup("MCP_SERVER_PORT") {
            match port.trim().parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("Ignoring MCP_SERVER_PORT: not a port number: {}", port),
            }
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::ScoutError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tubescout")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.mode, ServerMode::Stdio);
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.youtube.client_cache_capacity, 16);
        assert!(settings.youtube.api_key.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nmode = \"http\"\nport = 8080\n\n[youtube]\nrequest_timeout_secs = 5\n",
        )
        .unwrap();

        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.server.mode, ServerMode::Http);
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.youtube.request_timeout_secs, 5);
        assert_eq!(settings.youtube.transcript_language, "en");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.youtube.transcript_language = "de".to_string();
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.youtube.transcript_language, "de");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("YOUTUBE_API_KEY", "AIzaFromEnvironment0000000000000000000"),
            ("MCP_SERVER_MODE", "HTTP"),
            ("MCP_SERVER_PORT", "not-a-port"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(
            settings.youtube.api_key.as_deref(),
            Some("AIzaFromEnvironment0000000000000000000")
        );
        assert_eq!(settings.server.mode, ServerMode::Http);
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_server_mode_parse() {
        assert_eq!("stdio".parse::<ServerMode>().unwrap(), ServerMode::Stdio);
        assert!("sse".parse::<ServerMode>().is_err());
    }
}
