//! MCP command implementation.

use super::serve::run_serve;
use crate::config::{ServerMode, Settings};
use crate::mcp::McpServer;
use anyhow::Result;

/// Run the MCP server on the configured transport.
pub async fn run_mcp(settings: Settings) -> Result<()> {
    match settings.server.mode {
        ServerMode::Stdio => McpServer::new(&settings).run().await,
        ServerMode::Http => {
            let host = settings.server.host.clone();
            let port = settings.server.port;
            run_serve(&host, port, settings).await
        }
    }
}
