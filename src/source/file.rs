//! Local CSV or JSON exports of the customer table

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{coerce_rows, DataSource};
use crate::analytics::CustomerRecord;
use crate::error::{DashboardError, ErrorCode, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(DashboardError::data_source_with_code(
                ErrorCode::SOURCE_UNSUPPORTED_FORMAT,
                format!(
                    "Unsupported export format for {} (expected .csv or .json)",
                    path.display()
                ),
            )),
        }
    }
}

/// A table export on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Every CSV cell is handed to coercion as text, the same shape a JSON
    /// export of string columns has, so identifiers like "007" survive.
    fn parse_csv(&self, content: &str) -> Result<Vec<CustomerRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader.headers().cloned().map_err(|e| {
            DashboardError::data_source_with_code(
                ErrorCode::SOURCE_INVALID_BODY,
                format!("{} has no readable header row", self.path.display()),
            )
            .with_source(e)
        })?;

        let mut rows = Vec::new();
        for (index, row) in reader.records().enumerate() {
            match row {
                Ok(row) => {
                    let object: Map<String, Value> = headers
                        .iter()
                        .zip(row.iter())
                        .map(|(name, cell)| (name.to_string(), Value::String(cell.to_string())))
                        .collect();
                    rows.push(Value::Object(object));
                }
                Err(e) => warn!("Skipping row {} of {}: {}", index + 1, self.path.display(), e),
            }
        }
        Ok(coerce_rows(rows, &self.path.display().to_string()).records)
    }

    fn parse_json(&self, content: &str) -> Result<Vec<CustomerRecord>> {
        let rows: Vec<Value> = serde_json::from_str(content).map_err(|e| {
            DashboardError::data_source_with_code(
                ErrorCode::SOURCE_INVALID_BODY,
                format!("{} is not a JSON array of rows", self.path.display()),
            )
            .with_source(e)
        })?;
        Ok(coerce_rows(rows, &self.path.display().to_string()).records)
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>> {
        let format = ExportFormat::from_path(&self.path)?;
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DashboardError::from(e).with_context(self.path.display()))?;

        let records = match format {
            ExportFormat::Csv => self.parse_csv(&content)?,
            ExportFormat::Json => self.parse_json(&content)?,
        };
        info!(
            "Loaded {} customers from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn load(name: &str, content: &str) -> Result<Vec<CustomerRecord>> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        FileSource::new(&path).fetch_customers().await
    }

    #[tokio::test]
    async fn test_csv_export() {
        let records = load(
            "customers.csv",
            "customer_id,total_spent,churn_risk_score,city\nC1,1200,0.15,Mumbai\nC2,,abc,\n,5,0.1,Pune\n",
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].total_spent, Some(1200.0));
        assert_eq!(records[0].city.as_deref(), Some("Mumbai"));
        assert_eq!(records[1].total_spent, None);
        assert_eq!(records[1].churn_risk(), 0.0);
        assert_eq!(records[1].city, None);
    }

    #[tokio::test]
    async fn test_csv_text_columns_keep_their_spelling() {
        let records = load(
            "customers.csv",
            "customer_id,city,income_bracket,total_orders\n007,00501,1.50,3\n7,x,y,\n",
        )
        .await
        .unwrap();

        let ids: Vec<_> = records.iter().map(|r| r.customer_id.as_str()).collect();
        assert_eq!(ids, vec!["007", "7"]);
        assert_eq!(records[0].city.as_deref(), Some("00501"));
        assert_eq!(records[0].income_bracket.as_deref(), Some("1.50"));
        assert_eq!(records[0].total_orders, Some(3.0));
        assert_eq!(records[1].total_orders, None);
    }

    #[tokio::test]
    async fn test_csv_and_json_exports_agree() {
        let csv = load("customers.csv", "customer_id,city\n007,00501\n")
            .await
            .unwrap();
        let json = load(
            "customers.json",
            r#"[{"customer_id": "007", "city": "00501"}]"#,
        )
        .await
        .unwrap();
        assert_eq!(csv, json);
    }

    #[tokio::test]
    async fn test_json_export() {
        let records = load(
            "customers.json",
            r#"[{"customer_id": "C1", "total_orders": "4"}, {"customer_id": 7}]"#,
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].total_orders(), 4.0);
        assert_eq!(records[1].customer_id, "7");
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let err = load("customers.json", "{").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::SOURCE_INVALID_BODY);
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let err = load("customers.xlsx", "").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::SOURCE_UNSUPPORTED_FORMAT);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = FileSource::new("/nonexistent/customers.csv")
            .fetch_customers()
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::SOURCE_IO_ERROR);
    }
}
