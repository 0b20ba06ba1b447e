//! MCP server implementation.

use super::protocol::*;
use super::tools::get_tools;
use crate::config::Settings;
use crate::error::ScoutError;
use crate::tools::{self, ToolCall};
use crate::youtube::PlatformResolver;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "tubescout";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server for tubescout.
pub struct McpServer {
    resolver: PlatformResolver,
}

impl McpServer {
    /// Create a server that talks to YouTube with the configured key and endpoints.
    pub fn new(settings: &Settings) -> Self {
        Self::with_resolver(PlatformResolver::from_settings(&settings.youtube))
    }

    /// Create a server around an existing resolver.
    pub fn with_resolver(resolver: PlatformResolver) -> Self {
        Self { resolver }
    }

    /// Run the MCP server over stdio (reads from stdin, writes to stdout).
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        // Logs go to stderr so they don't interfere with JSON-RPC
        info!("tubescout MCP server listening on stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_message(&line).await {
                let mut payload = serde_json::to_string(&response)?;
                payload.push('\n');
                stdout.write_all(payload.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw JSON-RPC message. Notifications produce no response.
    pub async fn handle_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<JsonRpcRequest>(raw) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!("Failed to parse request: {}", e);
                Some(JsonRpcResponse::error(None, PARSE_ERROR, "Parse error"))
            }
        }
    }

    /// Handle a single JSON-RPC request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!("Received {}", request.method);
        let id = request.id;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id, request.params),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => to_response(id, ToolsListResult { tools: get_tools() }),
            "tools/call" => self.handle_tools_call(id, request.params).await,
            method if method.starts_with("notifications/") => return None,
            method => {
                let message = format!("Method not found: {}", method);
                JsonRpcResponse::error(id, METHOD_NOT_FOUND, &message)
            }
        };

        Some(response)
    }

    /// Handle initialize request.
    fn handle_initialize(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: InitializeParams = params
            .and_then(|p| serde_json::from_value(p).ok())
            .unwrap_or_default();
        match &params.client_info {
            Some(client) => info!("Client connected: {} {}", client.name, client.version),
            None => info!("Client connected"),
        }
        if let Some(version) = &params.protocol_version {
            debug!("Client protocol version {}", version);
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION,
            capabilities: json!({ "tools": { "listChanged": false } }),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        to_response(id, result)
    }

    /// Handle tools/call request.
    async fn handle_tools_call(
        &self,
        id: Option<Value>,
        params: Option<Value>,
    ) -> JsonRpcResponse {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    let message = format!("Invalid params: {}", e);
                    return JsonRpcResponse::error(id, INVALID_PARAMS, &message);
                }
            },
            None => return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params"),
        };

        let outcome = match ToolCall::parse(&params.name, params.arguments) {
            Ok(call) => tools::execute(&call, &self.resolver).await,
            Err(e) => Err(e),
        };

        let result = match outcome {
            Ok(text) => ToolCallResult::text(text),
            Err(ScoutError::UnknownTool(name)) => {
                let message = format!("Unknown tool: {}", name);
                return JsonRpcResponse::error(id, INVALID_PARAMS, &message);
            }
            Err(e) => {
                error!("Tool {} failed: {}", params.name, e);
                ToolCallResult::error(format!("Error executing tool {}: {}", params.name, e))
            }
        };

        to_response(id, result)
    }
}

fn to_response<T: Serialize>(id: Option<Value>, result: T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => {
            let message = format!("Failed to encode result: {}", e);
            JsonRpcResponse::error(id, INTERNAL_ERROR, &message)
        }
    }
}
