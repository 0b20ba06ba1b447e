//! Direct tool invocation from the command line.

use crate::cli::Output;
use crate::config::Settings;
use crate::tools::{self, ToolCall};
use crate::youtube::PlatformResolver;
use anyhow::Result;

/// Run a tool once and print its report.
pub async fn run_tool(call: ToolCall, settings: &Settings) -> Result<()> {
    let resolver = PlatformResolver::from_settings(&settings.youtube);

    let spinner = Output::spinner(&format!("Running {}...", call.name()));
    let outcome = tools::execute(&call, &resolver).await;
    spinner.finish_and_clear();

    let report = outcome?;
    Output::report(&report);
    Ok(())
}
