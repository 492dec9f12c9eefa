//! Customer-engagement analytics
//!
//! The transforms in this module are pure functions over `&[CustomerRecord]`.
//! They never fail: empty input yields empty lists or all-zero rollups, and
//! missing values read as zero or a sentinel label. `AnalyticsEngine` pairs
//! them with a data source, and `AnalyticsApiServer` serves them over HTTP.

pub mod affinity;
pub mod api_server;
pub mod breakdown;
pub mod campaign;
pub mod channel;
pub mod churn;
pub mod clv;
pub mod demographics;
pub mod engagement;
pub mod engine;
pub mod export;
pub mod grouping;
pub mod kpi;
pub mod models;
pub mod records;
pub mod report;
pub mod rfm;
pub mod rounding;
pub mod seasonal;
pub mod tables;

pub use affinity::affinity_analysis;
pub use api_server::AnalyticsApiServer;
pub use breakdown::{device_usage_analysis, traffic_source_analysis};
pub use campaign::campaign_roi_analysis;
pub use channel::{channel_matrix, channel_matrix_with, NoNoise, ResponseNoise, SeededNoise, ThreadRngNoise};
pub use churn::churn_risk_segmentation;
pub use clv::clv_distribution;
pub use demographics::demographic_breakdown;
pub use engagement::engagement_metrics;
pub use engine::{Analysis, AnalysisKind, AnalyticsEngine};
pub use kpi::kpi_summary;
pub use models::*;
pub use records::CustomerRecord;
pub use report::DashboardReport;
pub use rfm::rfm_segmentation;
pub use seasonal::seasonal_analysis;
