//! RFM (recency, frequency, monetary) segmentation
//!
//! Segment predicates are evaluated independently. A record can sit in more
//! than one segment, so member counts may add up to more than the input.

use super::grouping::CountSum;
use super::models::RfmSegment;
use super::records::CustomerRecord;
use super::rounding::round_i64;
use super::tables::{SegmentDef, RFM_SEGMENTS};

const SCORE_MIN: i64 = 1;
const SCORE_MAX: i64 = 5;
const DAYS_PER_RECENCY_STEP: f64 = 30.0;

/// Frequency score from the mean order count; an empty or zero mean scores 1
pub fn frequency_score(mean_orders: f64) -> i64 {
    let orders = if mean_orders == 0.0 { 1.0 } else { mean_orders };
    round_i64(orders).clamp(SCORE_MIN, SCORE_MAX)
}

/// Recency score from the mean days since last purchase
pub fn recency_score(mean_days: f64) -> i64 {
    (SCORE_MAX - round_i64(mean_days / DAYS_PER_RECENCY_STEP)).clamp(SCORE_MIN, SCORE_MAX)
}

fn score_segment(def: &SegmentDef, records: &[CustomerRecord]) -> RfmSegment {
    let mut orders = CountSum::default();
    let mut days = CountSum::default();
    let mut spent = CountSum::default();
    for record in def.members(records) {
        orders.add(record.total_orders());
        days.add(record.days_since_last_purchase());
        spent.add(record.total_spent());
    }

    RfmSegment {
        segment: def.label.to_string(),
        frequency: frequency_score(orders.mean()),
        recency: recency_score(days.mean()),
        monetary: round_i64(spent.mean()),
        customers: orders.count,
    }
}

/// Scores for the five fixed RFM segments
pub fn rfm_segmentation(records: &[CustomerRecord]) -> Vec<RfmSegment> {
    if records.is_empty() {
        return Vec::new();
    }
    RFM_SEGMENTS
        .iter()
        .map(|def| score_segment(def, records))
        .collect()
}
