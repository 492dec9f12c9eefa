//! Summary models produced by the aggregation transforms
//!
//! Every summary is a flat record of primitives, serialized in camelCase for
//! direct use by a charting layer.

use serde::{Deserialize, Serialize};

/// Affinity statistics for one product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAffinity {
    pub category: String,
    /// Mean affinity scaled to 0-100
    pub avg_affinity: i64,
    pub high_affinity_customers: usize,
    pub percentage: i64,
}

/// Customers acquired through one traffic source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSourceBreakdown {
    pub source: String,
    pub customers: usize,
    pub percentage: i64,
    pub avg_spent: i64,
}

/// Customers using one primary device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUsageBreakdown {
    pub device: String,
    pub users: usize,
    pub percentage: i64,
    /// Mean mobile usage ratio scaled to 0-100
    pub avg_mobile_ratio: i64,
}

/// Engagement rollup across all customers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMetrics {
    pub avg_session_duration: i64,
    pub avg_scroll_depth: i64,
    pub avg_page_views: i64,
    pub avg_search_queries: i64,
    pub total_cart_additions: f64,
    pub total_cart_abandonments: f64,
}

/// One churn risk band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurnRiskSegment {
    pub segment: String,
    pub customers: usize,
    pub percentage: i64,
    #[serde(rename = "avgCLV")]
    pub avg_clv: i64,
    pub color: String,
    pub avg_days_since_purchase: i64,
}

/// Return on investment for one recommended campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRoi {
    pub campaign: String,
    pub customers: usize,
    #[serde(rename = "avgROI")]
    pub avg_roi: f64,
    pub total_spent: f64,
    pub avg_intent_score: f64,
    pub efficiency: f64,
}

/// Peak-month shoppers and their average spend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalMonth {
    pub month: String,
    pub peak_shoppers: usize,
    pub avg_spent: i64,
}

/// Recency/frequency/monetary scores for one segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfmSegment {
    pub segment: String,
    /// 1-5
    pub frequency: i64,
    /// 1-5, higher means more recent
    pub recency: i64,
    pub monetary: i64,
    pub customers: usize,
}

/// Customers within one lifetime-value band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClvBucket {
    pub range: String,
    pub customers: usize,
    pub percentage: i64,
}

/// Response rates of one channel across the matrix segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResponse {
    pub channel: String,
    pub champions: i64,
    pub loyal: i64,
    pub atrisk: i64,
    pub lost: i64,
    /// Rates are synthetic estimates that vary between calls
    pub estimated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderShare {
    pub gender: String,
    pub customers: usize,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupShare {
    pub age_group: String,
    pub customers: usize,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityShare {
    pub city: String,
    pub customers: usize,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeShare {
    pub bracket: String,
    pub customers: usize,
    pub percentage: i64,
}

/// Demographic breakdown of the customer base
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicsSummary {
    pub gender_distribution: Vec<GenderShare>,
    pub age_distribution: Vec<AgeGroupShare>,
    pub city_distribution: Vec<CityShare>,
    pub income_distribution: Vec<IncomeShare>,
    pub male_percentage: i64,
    pub dominant_age_group: String,
    pub dominant_age_percentage: i64,
    pub top_city: String,
    pub top_city_percentage: i64,
    pub dominant_income_bracket: String,
    pub dominant_income_percentage: i64,
}

/// Headline figures for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_revenue: f64,
    pub active_customers: usize,
    #[serde(rename = "avgCLV")]
    pub avg_clv: f64,
    pub avg_conversion_rate: f64,
}
