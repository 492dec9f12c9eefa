//! Traffic source and device usage breakdowns
//!
//! Both group customers by a categorical column, in first-occurrence order,
//! and attach one group-specific average.

use super::grouping::{CountSum, OrderedGroups};
use super::models::{DeviceUsageBreakdown, TrafficSourceBreakdown};
use super::records::CustomerRecord;
use super::rounding::{percentage, round_i64};
use super::tables::UNKNOWN_LABEL;

fn group_by<'a>(
    records: &'a [CustomerRecord],
    key: impl Fn(&'a CustomerRecord) -> &'a str,
    value: impl Fn(&CustomerRecord) -> f64,
) -> OrderedGroups<CountSum> {
    let mut groups: OrderedGroups<CountSum> = OrderedGroups::new();
    for record in records {
        groups.entry(key(record)).add(value(record));
    }
    groups
}

/// Customers per traffic source with their average spend.
///
/// Records without a source form the "Unknown" group, and that group's
/// average is taken over its own members like every other group.
pub fn traffic_source_analysis(records: &[CustomerRecord]) -> Vec<TrafficSourceBreakdown> {
    let total = records.len();
    group_by(
        records,
        |r| r.traffic_source_or(UNKNOWN_LABEL),
        CustomerRecord::total_spent,
    )
    .into_iter()
    .map(|(source, acc)| TrafficSourceBreakdown {
        source,
        customers: acc.count,
        percentage: percentage(acc.count, total),
        avg_spent: round_i64(acc.mean()),
    })
    .collect()
}

/// Customers per primary device with their average mobile usage (0-100)
pub fn device_usage_analysis(records: &[CustomerRecord]) -> Vec<DeviceUsageBreakdown> {
    let total = records.len();
    group_by(
        records,
        |r| r.device_or(UNKNOWN_LABEL),
        CustomerRecord::mobile_usage_ratio,
    )
    .into_iter()
    .map(|(device, acc)| DeviceUsageBreakdown {
        device,
        users: acc.count,
        percentage: percentage(acc.count, total),
        avg_mobile_ratio: round_i64(acc.mean() * 100.0),
    })
    .collect()
}
