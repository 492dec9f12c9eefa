//! CLI argument structures

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::analytics::AnalysisKind;

/// Customer-engagement analytics for the dashboard
#[derive(Parser)]
#[command(name = "pulseboard")]
#[command(about = "pulseboard - Customer-engagement analytics from your customer table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (defaults to ./pulseboard.toml, then the global config)
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read customers from, overriding the settings file
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Read a local CSV or JSON export instead of the REST table
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Table to read from the REST backend
    #[arg(long)]
    pub table: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute every summary and print the full report as JSON
    #[command(name = "report")]
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Write the report to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Seed the estimated channel rates so runs are reproducible
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a single analysis
    #[command(name = "analyze")]
    Analyze {
        /// Analysis to run (kpis, affinity, traffic-sources, devices, engagement,
        /// churn, campaigns, seasonal, rfm, clv, channels, demographics)
        analysis: AnalysisKind,

        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write the result to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Seed the estimated channel rates so runs are reproducible
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Serve the analytics REST API
    #[command(name = "serve")]
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },

    /// Send one message to the chat endpoint
    #[command(name = "chat")]
    Chat {
        /// Message to send
        message: String,

        /// Email of the asking customer
        #[arg(long, default_value = "")]
        email: String,

        /// Identifier of the asking customer
        #[arg(long, default_value = "")]
        customer_id: String,

        /// Display name of the asking customer
        #[arg(long, default_value = "")]
        customer_name: String,

        /// Chat service base URL
        #[arg(long)]
        url: Option<String>,
    },
}
