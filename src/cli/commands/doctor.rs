//! Doctor command - verify configuration and YouTube access.

use crate::cli::{mask_secret, Output};
use crate::config::credentials::{clean_api_key, validate_api_key};
use crate::config::{ServerMode, Settings};
use crate::youtube::PlatformResolver;
use console::style;
use std::time::Instant;
use url::Url;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub async fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("tubescout Doctor");
    println!();
    println!("Checking configuration and YouTube access...\n");

    let mut checks = Vec::new();

    println!("{}", style("API Configuration").bold());
    let key_check = check_api_key(settings.youtube.api_key.as_deref());
    key_check.print();
    let key_ok = key_check.status == CheckStatus::Ok;
    checks.push(key_check);

    for check in check_endpoints(settings) {
        check.print();
        checks.push(check);
    }

    if key_ok {
        let check = check_connectivity(settings).await;
        check.print();
        checks.push(check);
    }

    println!();

    println!("{}", style("Configuration").bold());
    let config_check = check_config_file();
    config_check.print();
    checks.push(config_check);

    let server_check = check_server(settings);
    server_check.print();
    checks.push(server_check);

    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before using tubescout.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! tubescout is ready to use.");
    }

    Ok(())
}

/// Check that an API key is configured and plausible.
fn check_api_key(raw: Option<&str>) -> CheckResult {
    let key = raw.map(clean_api_key);
    match validate_api_key(key.as_deref(), raw) {
        Ok(()) => {
            let key = key.unwrap_or_default();
            CheckResult::ok("YOUTUBE_API_KEY", &format!("configured ({})", mask_secret(&key)))
        }
        Err(_) if key.as_deref().map_or(true, str::is_empty) => CheckResult::error(
            "YOUTUBE_API_KEY",
            "not set",
            "Set with: export YOUTUBE_API_KEY=... (or tubescout config set youtube.api_key ...)",
        ),
        Err(_) => CheckResult::error(
            "YOUTUBE_API_KEY",
            "too short to be a Data API key",
            "Check for stray quotes or truncation in your .env file",
        ),
    }
}

/// Check that configured endpoints parse as URLs.
fn check_endpoints(settings: &Settings) -> Vec<CheckResult> {
    [
        ("API endpoint", &settings.youtube.api_base_url),
        ("Watch endpoint", &settings.youtube.watch_base_url),
    ]
    .into_iter()
    .map(|(name, raw)| match Url::parse(raw) {
        Ok(url) => CheckResult::ok(name, url.as_str()),
        Err(e) => {
            let message = format!("invalid URL: {}", e);
            CheckResult::error(name, &message, "Fix it with: tubescout config set")
        }
    })
    .collect()
}

/// Issue one cheap search to confirm the key works.
async fn check_connectivity(settings: &Settings) -> CheckResult {
    let resolver = PlatformResolver::from_settings(&settings.youtube);
    let platform = match resolver.resolve(None) {
        Ok(p) => p,
        Err(e) => {
            return CheckResult::error("YouTube Data API", &e.to_string(), "Check your API key")
        }
    };

    let started = Instant::now();
    match platform.search_videos("tubescout", 1).await {
        Ok(_) => CheckResult::ok(
            "YouTube Data API",
            &format!("reachable ({} ms)", started.elapsed().as_millis()),
        ),
        Err(e) => CheckResult::error(
            "YouTube Data API",
            &e.to_string(),
            "Make sure the YouTube Data API v3 is enabled for this key",
        ),
    }
}

/// Check if config file exists.
fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create with: tubescout config set <key> <value>",
        )
    }
}

fn check_server(settings: &Settings) -> CheckResult {
    match settings.server.mode {
        ServerMode::Stdio => CheckResult::ok("MCP transport", "stdio"),
        ServerMode::Http => CheckResult::ok(
            "MCP transport",
            &format!("http on {}:{}", settings.server.host, settings.server.port),
        ),
    }
}
