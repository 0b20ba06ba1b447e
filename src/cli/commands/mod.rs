//! CLI command implementations.

mod config;
mod doctor;
mod mcp;
mod serve;
mod tool;

pub use config::run_config;
pub use doctor::run_doctor;
pub use mcp::run_mcp;
pub use serve::{router, run_serve};
pub use tool::run_tool;
