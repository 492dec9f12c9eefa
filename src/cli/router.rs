//! Command routing and execution

use anyhow::Result;

use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::config::Settings;

/// Execute a CLI command with the loaded settings
pub async fn execute_command(command: Commands, settings: Settings) -> Result<()> {
    match command {
        Commands::Report {
            source,
            output,
            seed,
        } => run_report_command(settings, source, output, seed).await,
        Commands::Analyze {
            analysis,
            source,
            format,
            output,
            seed,
        } => {
            run_analyze_command(
                settings,
                AnalyzeParams {
                    analysis,
                    source,
                    format,
                    output,
                    seed,
                },
            )
            .await
        }
        Commands::Serve { source, host, port } => {
            run_serve_command(settings, source, host, port).await
        }
        Commands::Chat {
            message,
            email,
            customer_id,
            customer_name,
            url,
        } => {
            run_chat_command(
                settings,
                ChatParams {
                    message,
                    email,
                    customer_id,
                    customer_name,
                    url,
                },
            )
            .await
        }
    }
}
