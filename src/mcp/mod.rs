//! MCP (Model Context Protocol) server for tubescout.
//!
//! Exposes the YouTube tools to AI assistants over JSON-RPC 2.0, either on
//! stdio or through the HTTP transport in `tubescout serve`.

mod protocol;
mod server;
mod tools;

pub use protocol::{JsonRpcRequest, JsonRpcResponse};
pub use server::McpServer;
pub use tools::get_tools;
