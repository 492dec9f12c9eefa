//! # pulseboard
//!
//! Customer-engagement analytics: turns a flat customer table into the
//! chart-ready summaries a marketing dashboard renders.
//!
//! ## Modules
//!
//! - `analytics` - Aggregation transforms, the report, the engine and the REST API
//! - `source` - Customer data sources (REST table, CSV/JSON export, in-memory)
//! - `chat` - Client for the remote chat endpoint
//! - `currency` - Indian rupee formatting and parsing
//! - `config` - Layered settings (defaults, TOML file, environment)
//! - `error` - Unified error type with numeric codes
//! - `app` - Logging and fatal error handling for the binary
//! - `cli` - Command-line interface
pub mod analytics;
pub mod app;
pub mod chat;
pub mod cli;
pub mod config;
pub mod currency;
pub mod error;
pub mod source;

pub use analytics::{CustomerRecord, DashboardReport};
pub use error::{DashboardError, Result};
