//! Customer lifetime value distribution

use super::models::ClvBucket;
use super::records::CustomerRecord;
use super::rounding::percentage;
use super::tables::CLV_BANDS;

/// Customers per lifetime-value band. Bands include their lower bound.
pub fn clv_distribution(records: &[CustomerRecord]) -> Vec<ClvBucket> {
    if records.is_empty() {
        return Vec::new();
    }
    let total = records.len();

    CLV_BANDS
        .iter()
        .map(|def| {
            let customers = records
                .iter()
                .filter(|r| def.band.contains(r.clv()))
                .count();
            ClvBucket {
                range: def.label.to_string(),
                customers,
                percentage: percentage(customers, total),
            }
        })
        .collect()
}
