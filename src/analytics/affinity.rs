//! Category affinity analysis

use super::models::CategoryAffinity;
use super::records::CustomerRecord;
use super::rounding::{mean_over, percentage, round_i64};
use super::tables::{CATEGORIES, HIGH_AFFINITY_THRESHOLD};

/// Mean affinity and high-affinity share for each product category, in the
/// declared category order.
pub fn affinity_analysis(records: &[CustomerRecord]) -> Vec<CategoryAffinity> {
    if records.is_empty() {
        return Vec::new();
    }
    let total = records.len();

    CATEGORIES
        .iter()
        .map(|def| {
            let avg = mean_over(records.iter().map(|r| r.affinity(def.category)), total);
            let high = records
                .iter()
                .filter(|r| r.affinity(def.category) > HIGH_AFFINITY_THRESHOLD)
                .count();

            CategoryAffinity {
                category: def.label.to_string(),
                avg_affinity: round_i64(avg * 100.0),
                high_affinity_customers: high,
                percentage: percentage(high, total),
            }
        })
        .collect()
}
