//! Seasonal analysis over peak shopping months

use super::grouping::CountSum;
use super::models::SeasonalMonth;
use super::records::CustomerRecord;
use super::rounding::round_i64;
use super::tables::MONTH_LABELS;

/// Twelve months, January first, each with the customers whose peak
/// shopping month it is and their average spend.
pub fn seasonal_analysis(records: &[CustomerRecord]) -> Vec<SeasonalMonth> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut months = [CountSum::default(); 12];
    for record in records {
        if let Some(month) = record.peak_month() {
            months[month - 1].add(record.total_spent());
        }
    }

    MONTH_LABELS
        .iter()
        .zip(months.iter())
        .map(|(label, acc)| SeasonalMonth {
            month: label.to_string(),
            peak_shoppers: acc.count,
            avg_spent: round_i64(acc.mean()),
        })
        .collect()
}
