//! Analytics engine: fetches the customer table and runs analyses over it

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::affinity::affinity_analysis;
use super::breakdown::{device_usage_analysis, traffic_source_analysis};
use super::campaign::campaign_roi_analysis;
use super::channel::{channel_matrix_with, ResponseNoise, SeededNoise, ThreadRngNoise};
use super::churn::churn_risk_segmentation;
use super::clv::clv_distribution;
use super::demographics::demographic_breakdown;
use super::engagement::engagement_metrics;
use super::export;
use super::kpi::kpi_summary;
use super::models::*;
use super::records::CustomerRecord;
use super::report::DashboardReport;
use super::rfm::rfm_segmentation;
use super::seasonal::seasonal_analysis;
use crate::error::{DashboardError, ErrorCode, Result};
use crate::source::DataSource;

/// One analysis the engine can run on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    Kpis,
    Affinity,
    TrafficSources,
    Devices,
    Engagement,
    Churn,
    Campaigns,
    Seasonal,
    Rfm,
    Clv,
    Channels,
    Demographics,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 12] = [
        Self::Kpis,
        Self::Affinity,
        Self::TrafficSources,
        Self::Devices,
        Self::Engagement,
        Self::Churn,
        Self::Campaigns,
        Self::Seasonal,
        Self::Rfm,
        Self::Clv,
        Self::Channels,
        Self::Demographics,
    ];

    /// Name used on the command line and in API routes
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Kpis => "kpis",
            Self::Affinity => "affinity",
            Self::TrafficSources => "traffic-sources",
            Self::Devices => "devices",
            Self::Engagement => "engagement",
            Self::Churn => "churn",
            Self::Campaigns => "campaigns",
            Self::Seasonal => "seasonal",
            Self::Rfm => "rfm",
            Self::Clv => "clv",
            Self::Channels => "channels",
            Self::Demographics => "demographics",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AnalysisKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.slug()).collect();
                DashboardError::validation_with_code(
                    ErrorCode::VALIDATION_UNKNOWN_ANALYSIS,
                    format!("unknown analysis '{}' (expected one of: {})", s, known.join(", ")),
                    Some("analysis".to_string()),
                )
            })
    }
}

/// The result of one analysis; serializes as the bare summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analysis {
    Kpis(KpiSummary),
    Affinity(Vec<CategoryAffinity>),
    TrafficSources(Vec<TrafficSourceBreakdown>),
    Devices(Vec<DeviceUsageBreakdown>),
    Engagement(EngagementMetrics),
    Churn(Vec<ChurnRiskSegment>),
    Campaigns(Vec<CampaignRoi>),
    Seasonal(Vec<SeasonalMonth>),
    Rfm(Vec<RfmSegment>),
    Clv(Vec<ClvBucket>),
    Channels(Vec<ChannelResponse>),
    Demographics(DemographicsSummary),
}

impl Analysis {
    pub fn compute(
        kind: AnalysisKind,
        records: &[CustomerRecord],
        noise: &mut dyn ResponseNoise,
    ) -> Self {
        match kind {
            AnalysisKind::Kpis => Self::Kpis(kpi_summary(records)),
            AnalysisKind::Affinity => Self::Affinity(affinity_analysis(records)),
            AnalysisKind::TrafficSources => Self::TrafficSources(traffic_source_analysis(records)),
            AnalysisKind::Devices => Self::Devices(device_usage_analysis(records)),
            AnalysisKind::Engagement => Self::Engagement(engagement_metrics(records)),
            AnalysisKind::Churn => Self::Churn(churn_risk_segmentation(records)),
            AnalysisKind::Campaigns => Self::Campaigns(campaign_roi_analysis(records)),
            AnalysisKind::Seasonal => Self::Seasonal(seasonal_analysis(records)),
            AnalysisKind::Rfm => Self::Rfm(rfm_segmentation(records)),
            AnalysisKind::Clv => Self::Clv(clv_distribution(records)),
            AnalysisKind::Channels => Self::Channels(channel_matrix_with(records, noise)),
            AnalysisKind::Demographics => Self::Demographics(demographic_breakdown(records)),
        }
    }

    /// Render as CSV. Rollups render as a single row; the demographic
    /// summary is nested and has no CSV form.
    pub fn to_csv(&self) -> Result<String> {
        match self {
            Self::Kpis(kpis) => export::to_csv(std::slice::from_ref(kpis)),
            Self::Affinity(rows) => export::to_csv(rows),
            Self::TrafficSources(rows) => export::to_csv(rows),
            Self::Devices(rows) => export::to_csv(rows),
            Self::Engagement(metrics) => export::to_csv(std::slice::from_ref(metrics)),
            Self::Churn(rows) => export::to_csv(rows),
            Self::Campaigns(rows) => export::to_csv(rows),
            Self::Seasonal(rows) => export::to_csv(rows),
            Self::Rfm(rows) => export::to_csv(rows),
            Self::Clv(rows) => export::to_csv(rows),
            Self::Channels(rows) => export::to_csv(rows),
            Self::Demographics(_) => Err(DashboardError::validation_with_code(
                ErrorCode::VALIDATION_GENERIC,
                "demographics has no CSV form, request JSON instead",
                Some("format".to_string()),
            )),
        }
    }
}

/// Runs analyses against a data source, refetching on every call
pub struct AnalyticsEngine {
    source: Arc<dyn DataSource>,
    noise_seed: Option<u64>,
}

impl AnalyticsEngine {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            noise_seed: None,
        }
    }

    /// Pin channel estimates to a seed so repeated runs agree
    pub fn with_noise_seed(mut self, seed: Option<u64>) -> Self {
        self.noise_seed = seed;
        self
    }

    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    fn noise(&self) -> Box<dyn ResponseNoise + Send> {
        match self.noise_seed {
            Some(seed) => Box::new(SeededNoise::new(seed)),
            None => Box::new(ThreadRngNoise),
        }
    }

    /// Fetch the current customer table
    pub async fn load_customers(&self) -> Result<Vec<CustomerRecord>> {
        let started = Instant::now();
        let records = self
            .source
            .fetch_customers()
            .await
            .map_err(|e| e.with_context(format!("source {}", self.source.describe())))?;

        info!(
            "Fetched {} customers from {} in {:?}",
            records.len(),
            self.source.describe(),
            started.elapsed()
        );
        Ok(records)
    }

    /// Every summary for the current data
    pub async fn report(&self) -> Result<DashboardReport> {
        let records = self.load_customers().await?;
        let report = DashboardReport::build_with(&records, self.noise().as_mut());
        debug!("Report generated at {}", report.generated_at);
        Ok(report)
    }

    /// A single analysis for the current data
    pub async fn analyze(&self, kind: AnalysisKind) -> Result<Analysis> {
        let records = self.load_customers().await?;
        debug!("Running {} analysis over {} customers", kind, records.len());
        Ok(Analysis::compute(kind, &records, self.noise().as_mut()))
    }
}
