//! End-to-end tests for the analytics REST API

mod common;

use async_trait::async_trait;
use pulseboard::analytics::api_server::{ApiResponse, API_PREFIX};
use pulseboard::analytics::{AnalyticsApiServer, AnalyticsEngine, ChurnRiskSegment};
use pulseboard::error::{DashboardError, Result};
use pulseboard::source::{DataSource, StaticSource};
use pulseboard::{CustomerRecord, DashboardReport};
use std::sync::Arc;
use tokio::net::TcpListener;

struct FailingSource;

#[async_trait]
impl DataSource for FailingSource {
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>> {
        Err(DashboardError::data_source_status(503, "table offline"))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

/// Serve on an ephemeral port and return the API base URL
async fn spawn_server(source: Arc<dyn DataSource>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let engine = Arc::new(AnalyticsEngine::new(source).with_noise_seed(Some(7)));
    let server = AnalyticsApiServer::new(engine, "127.0.0.1", addr.port());

    tokio::spawn(async move {
        let _ = server.serve(listener).await;
    });

    format!("http://{}{}", addr, API_PREFIX)
}

async fn sample_server() -> String {
    spawn_server(Arc::new(StaticSource::new(common::sample_customers()))).await
}

#[tokio::test]
async fn test_health() {
    let base = sample_server().await;
    let body: ApiResponse<String> = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(body.success);
    assert!(body.error.is_none());
}

#[tokio::test]
async fn test_churn_as_json() {
    let base = sample_server().await;
    let response = reqwest::get(format!("{base}/churn")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: ApiResponse<Vec<ChurnRiskSegment>> = response.json().await.unwrap();
    let bands = body.data.unwrap();
    assert_eq!(bands.len(), 4);
    assert_eq!(bands.iter().map(|b| b.customers).sum::<usize>(), 4);
}

#[tokio::test]
async fn test_full_report() {
    let base = sample_server().await;
    let body: ApiResponse<DashboardReport> = reqwest::get(format!("{base}/report"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let report = body.data.unwrap();
    assert_eq!(report.customer_count, 4);
    assert_eq!(report.channel_matrix.len(), 4);
    assert_eq!(report.seasonal.len(), 12);
}

#[tokio::test]
async fn test_clv_as_csv() {
    let base = sample_server().await;
    let response = reqwest::get(format!("{base}/clv?format=csv")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/csv; charset=utf-8"
    );

    let body = response.text().await.unwrap();
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some("range,customers,percentage"));
    assert_eq!(lines.count(), 5);
}

#[tokio::test]
async fn test_unknown_format_is_bad_request() {
    let base = sample_server().await;
    let response = reqwest::get(format!("{base}/rfm?format=xml")).await.unwrap();
    assert_eq!(response.status(), 400);

    let body: ApiResponse<serde_json::Value> = response.json().await.unwrap();
    assert!(!body.success);
    assert!(body.error.unwrap().contains("xml"));
}

#[tokio::test]
async fn test_report_has_no_csv_form() {
    let base = sample_server().await;
    let response = reqwest::get(format!("{base}/report?format=csv")).await.unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_source_failure_is_bad_gateway() {
    let base = spawn_server(Arc::new(FailingSource)).await;
    let response = reqwest::get(format!("{base}/kpis")).await.unwrap();
    assert_eq!(response.status(), 502);

    let body: ApiResponse<serde_json::Value> = response.json().await.unwrap();
    assert!(body.error.unwrap().contains("HTTP 503"));
}
