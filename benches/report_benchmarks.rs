//! Performance benchmarks for the aggregation transforms
//! Tracks report cost as the customer table grows

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulseboard::analytics::{
    churn_risk_segmentation, demographic_breakdown, rfm_segmentation, traffic_source_analysis,
    NoNoise,
};
use pulseboard::{CustomerRecord, DashboardReport};
use std::hint::black_box;

const SOURCES: [&str; 4] = ["Organic", "Paid", "Social", "Referral"];
const CITIES: [&str; 10] = [
    "Mumbai", "Delhi", "Bengaluru", "Chennai", "Kolkata", "Pune", "Hyderabad", "Jaipur",
    "Lucknow", "Ahmedabad",
];

/// Deterministic synthetic customers covering every band
fn synthetic_customers(count: usize) -> Vec<CustomerRecord> {
    (0..count)
        .map(|i| {
            let step = (i % 100) as f64 / 100.0;
            let mut record = CustomerRecord::new(format!("C{i:06}"));
            record.total_spent = Some(step * 4000.0);
            record.total_orders = Some((i % 15) as f64);
            record.days_since_last_purchase = Some((i % 240) as f64);
            record.churn_risk_score = Some(step);
            record.intent_score = Some(1.0 - step);
            record.electronics_affinity = Some(step);
            record.fashion_affinity = Some(1.0 - step);
            record.whatsapp_response_rate = Some(step * 100.0);
            record.email_open_rate = Some(step);
            record.age = Some(16.0 + (i % 50) as f64);
            record.gender = Some(if i % 2 == 0 { "Male" } else { "Female" }.to_string());
            record.city = Some(CITIES[i % CITIES.len()].to_string());
            record.primary_traffic_source = Some(SOURCES[i % SOURCES.len()].to_string());
            record.peak_shopping_month = Some((i % 12 + 1) as f64);
            record
        })
        .collect()
}

/// Benchmark the full report
fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");

    for size in [100, 1_000, 10_000] {
        let records = synthetic_customers(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| DashboardReport::build_with(black_box(records), &mut NoNoise));
        });
    }

    group.finish();
}

/// Benchmark the individual transforms on a mid-sized table
fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let records = synthetic_customers(5_000);

    group.bench_function("traffic_sources", |b| {
        b.iter(|| traffic_source_analysis(black_box(&records)))
    });
    group.bench_function("churn", |b| {
        b.iter(|| churn_risk_segmentation(black_box(&records)))
    });
    group.bench_function("rfm", |b| b.iter(|| rfm_segmentation(black_box(&records))));
    group.bench_function("demographics", |b| {
        b.iter(|| demographic_breakdown(black_box(&records)))
    });

    group.finish();
}

criterion_group!(benches, bench_full_report, bench_transforms);
criterion_main!(benches);
