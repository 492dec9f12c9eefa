//! Engagement rollup

use super::models::EngagementMetrics;
use super::records::CustomerRecord;
use super::rounding::{mean_over, round_i64};

/// Site engagement averages and cart totals across all customers.
///
/// Means divide by the full record count; missing values count as zero.
pub fn engagement_metrics(records: &[CustomerRecord]) -> EngagementMetrics {
    if records.is_empty() {
        return EngagementMetrics::default();
    }
    let total = records.len();
    let avg = |field: fn(&CustomerRecord) -> f64| mean_over(records.iter().map(field), total);

    EngagementMetrics {
        avg_session_duration: round_i64(avg(CustomerRecord::session_duration)),
        avg_scroll_depth: round_i64(avg(CustomerRecord::scroll_depth) * 100.0),
        avg_page_views: round_i64(avg(CustomerRecord::page_views)),
        avg_search_queries: round_i64(avg(CustomerRecord::search_queries)),
        total_cart_additions: records.iter().map(CustomerRecord::cart_additions).sum(),
        total_cart_abandonments: records.iter().map(CustomerRecord::cart_abandonments).sum(),
    }
}
