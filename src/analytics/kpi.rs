//! Headline KPIs

use super::models::KpiSummary;
use super::records::CustomerRecord;
use super::rounding::mean_over;

/// Revenue, customer count, average CLV and conversion rate
pub fn kpi_summary(records: &[CustomerRecord]) -> KpiSummary {
    if records.is_empty() {
        return KpiSummary::default();
    }
    let total = records.len();

    KpiSummary {
        total_revenue: records.iter().map(CustomerRecord::total_spent).sum(),
        active_customers: total,
        avg_clv: mean_over(records.iter().map(CustomerRecord::clv), total),
        avg_conversion_rate: mean_over(records.iter().map(CustomerRecord::intent), total)
            * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(kpi_summary(&[]), KpiSummary::default());
    }

    #[test]
    fn test_headline_figures() {
        let records = vec![
            CustomerRecord {
                total_spent: Some(1000.0),
                lifetime_value_predicted: Some(3000.0),
                intent_score: Some(0.5),
                ..CustomerRecord::new("A")
            },
            CustomerRecord {
                total_spent: Some(500.0),
                ..CustomerRecord::new("B")
            },
        ];
        let kpis = kpi_summary(&records);

        assert_eq!(kpis.total_revenue, 1500.0);
        assert_eq!(kpis.active_customers, 2);
        assert_eq!(kpis.avg_clv, 1750.0);
        assert_eq!(kpis.avg_conversion_rate, 25.0);
    }
}
