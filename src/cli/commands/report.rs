//! `report` command: every summary as one JSON document

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use super::{build_engine, emit};
use crate::analytics::export::to_json;
use crate::cli::args::SourceArgs;
use crate::config::Settings;
use crate::currency::format_inr;

pub async fn run_report_command(
    settings: Settings,
    source: SourceArgs,
    output: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let engine = build_engine(settings, source, seed)?;
    let report = engine.report().await?;
    info!(
        "{} customers, revenue {}, average CLV {}",
        report.customer_count,
        format_inr(report.kpis.total_revenue, true),
        format_inr(report.kpis.avg_clv, false)
    );
    emit(&to_json(&report)?, output.as_deref()).await
}
