//! Config command implementation.

use crate::cli::{mask_secret, ConfigAction, Output};
use crate::config::{ServerMode, Settings};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Run the config command.
pub fn run_config(
    action: &ConfigAction,
    settings: Settings,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Settings::default_config_path);

    match action {
        ConfigAction::Show => {
            let mut shown = settings;
            shown.youtube.api_key = shown.youtube.api_key.as_deref().map(mask_secret);
            let toml_str = toml::to_string_pretty(&shown)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Set { key, value } => {
            // Start from the file alone so environment overrides are not persisted.
            let mut stored = Settings::load_from(Some(&config_path))?;
            apply_setting(&mut stored, key, value)?;
            stored.save_to(&config_path)?;
            Output::success(&format!("Set {} in {}", key, config_path.display()));
        }

        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

/// Set one dotted configuration key from its string form.
fn apply_setting(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    let optional = |v: &str| {
        let v = v.trim();
        (!v.is_empty()).then(|| v.to_string())
    };

    match key {
        "general.log_level" => settings.general.log_level = value.to_string(),
        "general.env_file" => settings.general.env_file = optional(value),
        "youtube.api_key" => settings.youtube.api_key = optional(value),
        "youtube.api_base_url" => settings.youtube.api_base_url = value.to_string(),
        "youtube.watch_base_url" => settings.youtube.watch_base_url = value.to_string(),
        "youtube.transcript_language" => settings.youtube.transcript_language = value.to_string(),
        "youtube.request_timeout_secs" => {
            settings.youtube.request_timeout_secs = value
                .trim()
                .parse()
                .with_context(|| format!("{} expects a number of seconds", key))?
        }
        "youtube.client_cache_capacity" => {
            settings.youtube.client_cache_capacity = value
                .trim()
                .parse()
                .with_context(|| format!("{} expects a positive integer", key))?
        }
        "server.mode" => {
            settings.server.mode = value.parse::<ServerMode>().map_err(|e| anyhow::anyhow!(e))?
        }
        "server.host" => settings.server.host = value.to_string(),
        "server.port" => {
            settings.server.port = value
                .trim()
                .parse()
                .with_context(|| format!("{} expects a port number", key))?
        }
        _ => bail!("Unknown configuration key: {}", key),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_setting() {
        let mut settings = Settings::default();
        apply_setting(&mut settings, "server.mode", "http").unwrap();
        apply_setting(&mut settings, "server.port", "8080").unwrap();
        apply_setting(&mut settings, "youtube.api_key", "").unwrap();

        assert_eq!(settings.server.mode, ServerMode::Http);
        assert_eq!(settings.server.port, 8080);
        assert!(settings.youtube.api_key.is_none());

        assert!(apply_setting(&mut settings, "server.port", "eighty").is_err());
        assert!(apply_setting(&mut settings, "rag.model", "x").is_err());
    }

    #[test]
    fn test_set_persists_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let action = ConfigAction::Set {
            key: "youtube.transcript_language".to_string(),
            value: "fr".to_string(),
        };
        run_config(&action, Settings::default(), Some(path.clone())).unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.youtube.transcript_language, "fr");
    }
}
