//! REST API server for analytics endpoints

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use super::engine::{AnalysisKind, AnalyticsEngine};
use crate::error::{DashboardError, Result};

pub const API_PREFIX: &str = "/api/v1/analytics";

/// API server for analytics endpoints
pub struct AnalyticsApiServer {
    engine: Arc<AnalyticsEngine>,
    host: String,
    port: u16,
}

impl AnalyticsApiServer {
    pub fn new(engine: Arc<AnalyticsEngine>, host: impl Into<String>, port: u16) -> Self {
        Self {
            engine,
            host: host.into(),
            port,
        }
    }

    /// Bind the configured address and serve until the process stops
    pub async fn start(self) -> Result<()> {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            DashboardError::config(format!("Cannot bind {}", addr)).with_source(e)
        })?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        if let Ok(addr) = listener.local_addr() {
            info!(
                "Starting analytics API server on {} (source: {})",
                addr,
                self.engine.describe_source()
            );
        }

        axum::serve(listener, self.router())
            .await
            .map_err(|e| DashboardError::other("API server stopped unexpectedly").with_source(e))
    }

    /// Build API router
    pub fn router(&self) -> Router {
        let shared_state = Arc::new(ApiState {
            engine: self.engine.clone(),
        });

        let mut router = Router::new()
            .route(&format!("{API_PREFIX}/health"), get(health_check))
            .route(&format!("{API_PREFIX}/report"), get(get_report));

        for kind in AnalysisKind::ALL {
            router = router.route(
                &format!("{API_PREFIX}/{}", kind.slug()),
                get(
                    move |State(state): State<Arc<ApiState>>, Query(query): Query<FormatQuery>| async move {
                        get_analysis(state, kind, query).await
                    },
                ),
            );
        }

        router
            .layer(CorsLayer::permissive())
            .with_state(shared_state)
    }
}

/// Shared API state
struct ApiState {
    engine: Arc<AnalyticsEngine>,
}

/// Export format query parameter
#[derive(Debug, Default, Deserialize)]
struct FormatQuery {
    format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Csv,
}

impl FormatQuery {
    fn parse(&self) -> std::result::Result<Format, String> {
        match self.format.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("json") => Ok(Format::Json),
            Some("csv") => Ok(Format::Csv),
            Some(other) => Err(format!("Unsupported format '{}' (expected json or csv)", other)),
        }
    }
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

/// Map a failure to its HTTP status; source failures are upstream problems
fn failure(err: DashboardError) -> Response {
    let status = match &err {
        DashboardError::DataSource { .. } => StatusCode::BAD_GATEWAY,
        DashboardError::Validation { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!("Request failed ({}): {}", status, err);
    error_response(status, err.user_message())
}

fn csv_response(body: String) -> Response {
    (
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        body,
    )
        .into_response()
}

// API Handlers

async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("Analytics API is healthy"))
}

async fn get_report(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<FormatQuery>,
) -> Response {
    match query.parse() {
        Ok(Format::Json) => {}
        Ok(Format::Csv) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "The full report has no CSV form; request a single analysis".to_string(),
            )
        }
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    }

    match state.engine.report().await {
        Ok(report) => Json(ApiResponse::success(report)).into_response(),
        Err(e) => failure(e),
    }
}

async fn get_analysis(state: Arc<ApiState>, kind: AnalysisKind, query: FormatQuery) -> Response {
    let format = match query.parse() {
        Ok(format) => format,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };

    let analysis = match state.engine.analyze(kind).await {
        Ok(analysis) => analysis,
        Err(e) => return failure(e),
    };

    match format {
        Format::Json => Json(ApiResponse::success(analysis)).into_response(),
        Format::Csv => match analysis.to_csv() {
            Ok(body) => csv_response(body),
            Err(e) => failure(e),
        },
    }
}
