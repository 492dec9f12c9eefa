//! REST table source for a PostgREST-style backend

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::{coerce_rows, DataSource};
use crate::analytics::CustomerRecord;
use crate::error::{DashboardError, ErrorCode, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads every row of one table over `GET {base}/rest/v1/{table}?select=*`
pub struct RestTableSource {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

pub struct RestTableSourceBuilder {
    base_url: String,
    api_key: String,
    table: String,
    timeout: Duration,
}

impl RestTableSourceBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<RestTableSource> {
        let client = Client::builder().timeout(self.timeout).build().map_err(|e| {
            DashboardError::config("Failed to create HTTP client").with_source(e)
        })?;

        Ok(RestTableSource {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
            table: self.table,
        })
    }
}

impl RestTableSource {
    pub fn builder(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> RestTableSourceBuilder {
        RestTableSourceBuilder {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: table.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl DataSource for RestTableSource {
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>> {
        let url = self.table_url();
        debug!("Fetching customers from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("select", "*")])
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| {
                DashboardError::data_source_with_code(
                    ErrorCode::SOURCE_UNREACHABLE,
                    format!("Request to {} failed", url),
                )
                .with_source(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::data_source_status(
                status.as_u16(),
                format!("{} returned {}: {}", url, status, body.trim()),
            ));
        }

        let rows: Vec<Value> = response.json().await.map_err(|e| {
            DashboardError::data_source_with_code(
                ErrorCode::SOURCE_INVALID_BODY,
                format!("{} did not return a JSON array of rows", url),
            )
            .with_source(e)
        })?;

        let coerced = coerce_rows(rows, &self.table);
        info!(
            "Loaded {} customers from table {}",
            coerced.records.len(),
            self.table
        );
        Ok(coerced.records)
    }

    fn describe(&self) -> String {
        self.table_url()
    }
}
