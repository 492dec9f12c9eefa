//! `serve` command: the analytics REST API

use anyhow::Result;
use std::sync::Arc;

use super::build_engine;
use crate::analytics::AnalyticsApiServer;
use crate::cli::args::SourceArgs;
use crate::config::Settings;

pub async fn run_serve_command(
    settings: Settings,
    source: SourceArgs,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);

    let engine = build_engine(settings, source, None)?;
    AnalyticsApiServer::new(Arc::new(engine), host, port)
        .start()
        .await?;
    Ok(())
}
