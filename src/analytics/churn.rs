//! Churn risk segmentation

use super::grouping::CountSum;
use super::models::ChurnRiskSegment;
use super::records::CustomerRecord;
use super::rounding::{percentage, round_i64};
use super::tables::CHURN_BANDS;

/// Customers per churn risk band with their average lifetime value and
/// purchase recency. A missing score counts as 0 and lands in the lowest band.
pub fn churn_risk_segmentation(records: &[CustomerRecord]) -> Vec<ChurnRiskSegment> {
    if records.is_empty() {
        return Vec::new();
    }
    let total = records.len();

    CHURN_BANDS
        .iter()
        .map(|def| {
            let mut clv = CountSum::default();
            let mut days = CountSum::default();
            for record in records.iter().filter(|r| def.band.contains(r.churn_risk())) {
                clv.add(record.clv());
                days.add(record.days_since_last_purchase());
            }

            ChurnRiskSegment {
                segment: def.label.to_string(),
                customers: clv.count,
                percentage: percentage(clv.count, total),
                avg_clv: round_i64(clv.mean()),
                color: def.color.to_string(),
                avg_days_since_purchase: round_i64(days.mean()),
            }
        })
        .collect()
}
