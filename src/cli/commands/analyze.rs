//! `analyze` command: one analysis as JSON or CSV

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use super::{build_engine, emit};
use crate::analytics::export::to_json;
use crate::analytics::AnalysisKind;
use crate::cli::args::{OutputFormat, SourceArgs};
use crate::config::Settings;

pub struct AnalyzeParams {
    pub analysis: AnalysisKind,
    pub source: SourceArgs,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
}

pub async fn run_analyze_command(settings: Settings, params: AnalyzeParams) -> Result<()> {
    let engine = build_engine(settings, params.source, params.seed)?;
    let analysis = engine.analyze(params.analysis).await?;
    debug!("Rendering {} as {:?}", params.analysis, params.format);

    let rendered = match params.format {
        OutputFormat::Json => to_json(&analysis)?,
        OutputFormat::Csv => analysis.to_csv()?,
    };
    emit(&rendered, params.output.as_deref()).await
}
