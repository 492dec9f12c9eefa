//! Customer data sources
//!
//! A source yields the full customer table as coerced `CustomerRecord`s.
//! Rows that cannot be coerced (a missing `customer_id`, say) are skipped
//! and logged rather than failing the whole fetch.

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::analytics::CustomerRecord;
use crate::config::Settings;
use crate::error::{DashboardError, ErrorCode, Result};

pub mod file;
pub mod rest;

pub use file::FileSource;
pub use rest::RestTableSource;

/// Fetches the raw customer table
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch every customer row, coerced
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>>;

    /// Human-readable location for logs and error messages
    fn describe(&self) -> String;
}

/// In-memory records
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<CustomerRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<CustomerRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }
}

/// Outcome of coercing a batch of raw rows
#[derive(Debug, Default)]
pub struct CoercedRows {
    pub records: Vec<CustomerRecord>,
    pub skipped: usize,
}

/// Coerce JSON rows into records, skipping rows that do not deserialize
pub fn coerce_rows(rows: Vec<Value>, origin: &str) -> CoercedRows {
    let mut out = CoercedRows::default();
    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<CustomerRecord>(row) {
            Ok(record) => out.records.push(record),
            Err(e) => {
                warn!("Skipping row {} from {}: {}", index, origin, e);
                out.skipped += 1;
            }
        }
    }
    if out.skipped > 0 {
        warn!(
            "Skipped {} of {} rows from {}",
            out.skipped,
            out.skipped + out.records.len(),
            origin
        );
    }
    debug!("Coerced {} rows from {}", out.records.len(), origin);
    out
}

/// Build the source the settings describe; a file takes precedence over
/// the REST table.
pub fn from_settings(settings: &Settings) -> Result<Arc<dyn DataSource>> {
    settings.validate()?;

    if let Some(path) = &settings.data.file {
        return Ok(Arc::new(FileSource::new(PathBuf::from(path))));
    }

    let url = settings.data.url.clone().ok_or_else(|| {
        DashboardError::config_with_code(ErrorCode::CONFIG_MISSING_REQUIRED, "data.url is required")
    })?;
    let key = settings.data.api_key.clone().ok_or_else(|| {
        DashboardError::config_with_code(
            ErrorCode::CONFIG_MISSING_REQUIRED,
            "data.api_key is required",
        )
    })?;

    let source = RestTableSource::builder(url, key, settings.data.table.clone())
        .timeout(Duration::from_secs(settings.data.timeout_secs))
        .build()?;
    Ok(Arc::new(source))
}
