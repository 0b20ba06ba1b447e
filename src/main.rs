//! tubescout CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tubescout::cli::{commands, Cli, Commands};
use tubescout::config::Settings;
use tubescout::tools::{ChannelArgs, FounderScoutArgs, SearchArgs, ToolCall, VideoArgs};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.as_deref().map(Settings::expand_path);
    let mut settings = Settings::load_from(config_path.as_ref())?.with_env();
    if let Some(key) = cli.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
        settings.youtube.api_key = Some(key.to_string());
    }

    // Initialize logging. stdout carries JSON-RPC in MCP mode, so logs go to stderr.
    let log_level = match cli.verbose {
        0 => settings.general.log_level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("tubescout={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Execute command
    match cli.command {
        Commands::Mcp => {
            commands::run_mcp(settings).await?;
        }

        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| settings.server.host.clone());
            let port = port.unwrap_or(settings.server.port);
            commands::run_serve(&host, port, settings).await?;
        }

        Commands::Transcript { video } => {
            let call = ToolCall::GetTranscript(VideoArgs {
                video_id: Some(video),
                api_key: None,
            });
            commands::run_tool(call, &settings).await?;
        }

        Commands::Summary { video } => {
            let call = ToolCall::GetSummary(VideoArgs {
                video_id: Some(video),
                api_key: None,
            });
            commands::run_tool(call, &settings).await?;
        }

        Commands::Search { query, max_results } => {
            let call = ToolCall::SearchVideos(SearchArgs {
                query: Some(query),
                max_results: Some(max_results),
                api_key: None,
            });
            commands::run_tool(call, &settings).await?;
        }

        Commands::Channel { channel_id } => {
            let call = ToolCall::GetChannelInfo(ChannelArgs {
                channel_id: Some(channel_id),
                ..Default::default()
            });
            commands::run_tool(call, &settings).await?;
        }

        Commands::Analyze { channel_id, max_videos } => {
            let call = ToolCall::AnalyzeChannel(ChannelArgs {
                channel_id: Some(channel_id),
                max_videos: Some(max_videos),
                api_key: None,
            });
            commands::run_tool(call, &settings).await?;
        }

        Commands::Scout {
            revenue,
            topic,
            geography,
            max_results,
            run,
        } => {
            let call = ToolCall::FounderScout(FounderScoutArgs {
                monthly_revenue: revenue,
                key_topic: topic,
                target_geography: geography,
                max_results: Some(max_results),
                confirm: Some(!run),
                api_key: None,
            });
            commands::run_tool(call, &settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(&action, settings, config_path)?;
        }
    }

    Ok(())
}
