//! Property tests for the aggregation transforms
//!
//! These verify:
//! - Empty input yields empty lists or all-zero rollups
//! - Group counts partition the input
//! - Same input gives the same output
//! - The fixed-band boundary and zero-fill behaviors

mod common;

use common::CustomerBuilder;
use proptest::prelude::*;
use pulseboard::analytics::rfm::{frequency_score, recency_score};
use pulseboard::analytics::*;

fn arb_customer() -> impl Strategy<Value = CustomerRecord> {
    (
        proptest::option::of(0.0f64..1.0),
        proptest::option::of(0.0f64..5000.0),
        proptest::option::of(0.0f64..1.0),
        proptest::option::of(prop_oneof!["Organic", "Paid", "Social", ""]),
        proptest::option::of(prop_oneof!["Mobile", "Desktop", "Tablet"]),
        proptest::option::of(0.0f64..3000.0),
        proptest::option::of(1u32..=12),
    )
        .prop_map(|(churn, spent, affinity, source, device, clv, month)| {
            let mut record = CustomerRecord::new("C");
            record.churn_risk_score = churn;
            record.total_spent = spent;
            record.electronics_affinity = affinity;
            record.primary_traffic_source = source.map(String::from);
            record.primary_device = device.map(String::from);
            record.lifetime_value_predicted = clv;
            record.peak_shopping_month = month.map(f64::from);
            record
        })
}

/// Whole-number percentage, rounding halves up
fn share(count: usize, total: usize) -> i64 {
    (count as f64 / total as f64 * 100.0 + 0.5).floor() as i64
}

fn arb_customers() -> impl Strategy<Value = Vec<CustomerRecord>> {
    proptest::collection::vec(arb_customer(), 1..60)
}

mod empty_input {
    use super::*;

    #[test]
    fn test_list_transforms_return_empty() {
        let none: Vec<CustomerRecord> = Vec::new();
        assert!(affinity_analysis(&none).is_empty());
        assert!(traffic_source_analysis(&none).is_empty());
        assert!(device_usage_analysis(&none).is_empty());
        assert!(churn_risk_segmentation(&none).is_empty());
        assert!(campaign_roi_analysis(&none).is_empty());
        assert!(seasonal_analysis(&none).is_empty());
        assert!(rfm_segmentation(&none).is_empty());
        assert!(clv_distribution(&none).is_empty());
        assert!(channel_matrix(&none).is_empty());
    }

    #[test]
    fn test_rollups_are_zero() {
        let none: Vec<CustomerRecord> = Vec::new();
        assert_eq!(engagement_metrics(&none), EngagementMetrics::default());
        assert_eq!(kpi_summary(&none), KpiSummary::default());

        let demographics = demographic_breakdown(&none);
        assert!(demographics.gender_distribution.is_empty());
        assert_eq!(demographics.male_percentage, 0);
        assert_eq!(demographics.top_city_percentage, 0);
    }

    #[test]
    fn test_report_over_nothing() {
        let report = DashboardReport::build_with(&[], &mut NoNoise);
        assert_eq!(report.customer_count, 0);
        assert!(report.churn_risk.is_empty());
        assert!(report.channel_matrix.is_empty());
    }
}

mod partition {
    use super::*;

    proptest! {
        #[test]
        fn prop_traffic_sources_partition_input(records in arb_customers()) {
            let groups = traffic_source_analysis(&records);
            let total: usize = groups.iter().map(|g| g.customers).sum();
            prop_assert_eq!(total, records.len());

            for group in &groups {
                prop_assert_eq!(group.percentage, share(group.customers, records.len()));
            }
        }

        #[test]
        fn prop_devices_partition_input(records in arb_customers()) {
            let groups = device_usage_analysis(&records);
            let total: usize = groups.iter().map(|g| g.users).sum();
            prop_assert_eq!(total, records.len());

            for group in &groups {
                prop_assert_eq!(group.percentage, share(group.users, records.len()));
            }
        }

        #[test]
        fn prop_churn_bands_are_exhaustive(records in arb_customers()) {
            let bands = churn_risk_segmentation(&records);
            prop_assert_eq!(bands.len(), 4);
            let total: usize = bands.iter().map(|b| b.customers).sum();
            prop_assert_eq!(total, records.len());
        }

        #[test]
        fn prop_clv_buckets_are_exhaustive(records in arb_customers()) {
            let buckets = clv_distribution(&records);
            let total: usize = buckets.iter().map(|b| b.customers).sum();
            prop_assert_eq!(total, records.len());

            for bucket in &buckets {
                prop_assert_eq!(bucket.percentage, share(bucket.customers, records.len()));
            }
        }

        #[test]
        fn prop_campaigns_partition_input(records in arb_customers()) {
            let total: usize = campaign_roi_analysis(&records).iter().map(|c| c.customers).sum();
            prop_assert_eq!(total, records.len());
        }

        #[test]
        fn prop_seasonal_counts_only_valid_months(records in arb_customers()) {
            let months = seasonal_analysis(&records);
            prop_assert_eq!(months.len(), 12);
            let with_month = records.iter().filter(|r| r.peak_month().is_some()).count();
            let total: usize = months.iter().map(|m| m.peak_shoppers).sum();
            prop_assert_eq!(total, with_month);
        }
    }
}

mod idempotence {
    use super::*;

    proptest! {
        #[test]
        fn prop_transforms_are_deterministic(records in arb_customers()) {
            prop_assert_eq!(affinity_analysis(&records), affinity_analysis(&records));
            prop_assert_eq!(traffic_source_analysis(&records), traffic_source_analysis(&records));
            prop_assert_eq!(churn_risk_segmentation(&records), churn_risk_segmentation(&records));
            prop_assert_eq!(rfm_segmentation(&records), rfm_segmentation(&records));
            prop_assert_eq!(demographic_breakdown(&records), demographic_breakdown(&records));
            prop_assert_eq!(kpi_summary(&records), kpi_summary(&records));
            prop_assert_eq!(device_usage_analysis(&records), device_usage_analysis(&records));
            prop_assert_eq!(engagement_metrics(&records), engagement_metrics(&records));
            prop_assert_eq!(campaign_roi_analysis(&records), campaign_roi_analysis(&records));
            prop_assert_eq!(seasonal_analysis(&records), seasonal_analysis(&records));
            prop_assert_eq!(clv_distribution(&records), clv_distribution(&records));
        }

        #[test]
        fn prop_measured_channel_rows_are_deterministic(records in arb_customers()) {
            let first = channel_matrix(&records);
            let second = channel_matrix(&records);
            let measured = |rows: &[ChannelResponse]| -> Vec<ChannelResponse> {
                rows.iter().filter(|r| !r.estimated).cloned().collect()
            };
            prop_assert_eq!(measured(&first), measured(&second));
            prop_assert_eq!(measured(&first).len(), 2);
        }

        #[test]
        fn prop_estimated_cells_stay_in_bounds(records in arb_customers(), seed in any::<u64>()) {
            let matrix = channel_matrix_with(&records, &mut SeededNoise::new(seed));
            let base = [80, 60, 35, 15];
            for row in matrix.iter().filter(|r| r.estimated) {
                let cells = [row.champions, row.loyal, row.atrisk, row.lost];
                for (cell, base) in cells.iter().zip(base) {
                    prop_assert!((cell - base).abs() <= 5);
                    prop_assert!((0..=100).contains(cell));
                }
            }
        }

        #[test]
        fn prop_same_seed_same_matrix(records in arb_customers(), seed in any::<u64>()) {
            let first = channel_matrix_with(&records, &mut SeededNoise::new(seed));
            let second = channel_matrix_with(&records, &mut SeededNoise::new(seed));
            prop_assert_eq!(first, second);
        }
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn test_zero_fill_in_churn_averages() {
        let records = vec![
            CustomerBuilder::new("A").spent(1000.0).churn(0.1).build(),
            CustomerBuilder::new("B").churn(0.9).build(),
        ];

        let bands = churn_risk_segmentation(&records);
        let low = bands.iter().find(|b| b.segment == "Low Risk").unwrap();
        let critical = bands.iter().find(|b| b.segment == "Critical Risk").unwrap();
        assert_eq!(low.customers, 1);
        assert_eq!(low.avg_clv, 1000);
        assert_eq!(critical.customers, 1);
        assert_eq!(critical.avg_clv, 0);
    }

    #[test]
    fn test_affinity_threshold_is_strict() {
        let records: Vec<_> = (0..10)
            .map(|i| {
                let affinity = match i {
                    0..=2 => 0.8,
                    3 => 0.7,
                    _ => 0.2,
                };
                CustomerBuilder::new(&format!("C{i}")).electronics(affinity).build()
            })
            .collect();

        let electronics = &affinity_analysis(&records)[0];
        assert_eq!(electronics.category, "Electronics");
        assert_eq!(electronics.high_affinity_customers, 3);
        assert_eq!(electronics.percentage, 30);
    }

    #[test]
    fn test_rfm_scores_clamp() {
        assert_eq!(frequency_score(12.0), 5);
        assert_eq!(recency_score(200.0), 1);
        assert_eq!(recency_score(0.0), 5);
    }

    #[test]
    fn test_clv_lower_bound_inclusive() {
        let records = vec![CustomerBuilder::new("A").clv(500.0).build()];
        let buckets = clv_distribution(&records);

        let hit: Vec<_> = buckets.iter().filter(|b| b.customers == 1).collect();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].range, "$500-1000");
    }

    #[test]
    fn test_champions_also_count_as_loyal() {
        let records = vec![CustomerBuilder::new("A").spent(1500.0).churn(0.1).build()];
        let segments = rfm_segmentation(&records);

        let count = |name: &str| {
            segments
                .iter()
                .find(|s| s.segment == name)
                .map(|s| s.customers)
                .unwrap_or(0)
        };
        assert_eq!(count("Champions"), 1);
        assert_eq!(count("Loyal"), 1);
    }

    #[test]
    fn test_no_noise_gives_base_rates() {
        let records = common::sample_customers();
        let matrix = channel_matrix_with(&records, &mut NoNoise);

        let sms = matrix.iter().find(|r| r.channel == "SMS").unwrap();
        assert!(sms.estimated);
        assert_eq!(
            [sms.champions, sms.loyal, sms.atrisk, sms.lost],
            [80, 60, 35, 15]
        );

        let whatsapp = matrix.iter().find(|r| r.channel == "WhatsApp").unwrap();
        assert!(!whatsapp.estimated);
        assert_eq!(whatsapp.champions, 82);
    }
}
