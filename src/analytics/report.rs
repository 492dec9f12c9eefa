//! Full dashboard report for one dataset

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::affinity::affinity_analysis;
use super::breakdown::{device_usage_analysis, traffic_source_analysis};
use super::campaign::campaign_roi_analysis;
use super::channel::{channel_matrix_with, ResponseNoise, ThreadRngNoise};
use super::churn::churn_risk_segmentation;
use super::clv::clv_distribution;
use super::demographics::demographic_breakdown;
use super::engagement::engagement_metrics;
use super::kpi::kpi_summary;
use super::models::*;
use super::records::CustomerRecord;
use super::rfm::rfm_segmentation;
use super::seasonal::seasonal_analysis;

/// Every summary the dashboard renders, computed from one record set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub customer_count: usize,
    pub kpis: KpiSummary,
    pub category_affinity: Vec<CategoryAffinity>,
    pub traffic_sources: Vec<TrafficSourceBreakdown>,
    pub device_usage: Vec<DeviceUsageBreakdown>,
    pub engagement: EngagementMetrics,
    pub churn_risk: Vec<ChurnRiskSegment>,
    pub campaign_roi: Vec<CampaignRoi>,
    pub seasonal: Vec<SeasonalMonth>,
    pub rfm: Vec<RfmSegment>,
    pub clv_distribution: Vec<ClvBucket>,
    pub channel_matrix: Vec<ChannelResponse>,
    pub demographics: DemographicsSummary,
}

impl DashboardReport {
    /// Build the report with randomly perturbed channel estimates
    pub fn build(records: &[CustomerRecord]) -> Self {
        Self::build_with(records, &mut ThreadRngNoise)
    }

    /// Build the report with an explicit channel noise source
    pub fn build_with(records: &[CustomerRecord], noise: &mut dyn ResponseNoise) -> Self {
        debug!("Building dashboard report for {} customers", records.len());

        Self {
            generated_at: Utc::now(),
            customer_count: records.len(),
            kpis: kpi_summary(records),
            category_affinity: affinity_analysis(records),
            traffic_sources: traffic_source_analysis(records),
            device_usage: device_usage_analysis(records),
            engagement: engagement_metrics(records),
            churn_risk: churn_risk_segmentation(records),
            campaign_roi: campaign_roi_analysis(records),
            seasonal: seasonal_analysis(records),
            rfm: rfm_segmentation(records),
            clv_distribution: clv_distribution(records),
            channel_matrix: channel_matrix_with(records, noise),
            demographics: demographic_breakdown(records),
        }
    }
}
