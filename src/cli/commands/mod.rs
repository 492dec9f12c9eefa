//! Command implementation modules

pub mod analyze;
pub mod chat;
pub mod report;
pub mod serve;

pub use analyze::{run_analyze_command, AnalyzeParams};
pub use chat::{run_chat_command, ChatParams};
pub use report::run_report_command;
pub use serve::run_serve_command;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::analytics::AnalyticsEngine;
use crate::cli::args::SourceArgs;
use crate::config::Settings;

/// Apply command-line source overrides to the settings
pub(crate) fn apply_source_args(settings: &mut Settings, source: SourceArgs) {
    if let Some(file) = source.file {
        settings.data.file = Some(file);
    }
    if let Some(table) = source.table {
        settings.data.table = table;
    }
}

/// Build the engine for the configured data source
pub(crate) fn build_engine(
    mut settings: Settings,
    source: SourceArgs,
    seed: Option<u64>,
) -> Result<AnalyticsEngine> {
    apply_source_args(&mut settings, source);
    let source = crate::source::from_settings(&settings)?;
    Ok(AnalyticsEngine::new(source).with_noise_seed(seed))
}

/// Print to stdout or write to a file
pub(crate) async fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, content)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", content.trim_end()),
    }
    Ok(())
}
