//! Campaign ROI analysis

use super::grouping::OrderedGroups;
use super::models::CampaignRoi;
use super::records::CustomerRecord;
use super::rounding::{ratio, round_to};
use super::tables::NO_CAMPAIGN_LABEL;

#[derive(Debug, Default)]
struct CampaignTotals {
    customers: usize,
    predicted_roi: f64,
    spent: f64,
    intent: f64,
}

/// Predicted ROI, spend and intent per recommended campaign, in order of
/// first occurrence.
pub fn campaign_roi_analysis(records: &[CustomerRecord]) -> Vec<CampaignRoi> {
    let mut campaigns: OrderedGroups<CampaignTotals> = OrderedGroups::new();
    for record in records {
        let totals = campaigns.entry(record.campaign_or(NO_CAMPAIGN_LABEL));
        totals.customers += 1;
        totals.predicted_roi += record.campaign_roi();
        totals.spent += record.total_spent();
        totals.intent += record.intent();
    }

    campaigns
        .into_iter()
        .map(|(campaign, totals)| {
            let customers = totals.customers as f64;
            let avg_roi = ratio(totals.predicted_roi, customers);
            CampaignRoi {
                campaign,
                customers: totals.customers,
                avg_roi: round_to(avg_roi, 2),
                total_spent: totals.spent,
                avg_intent_score: round_to(ratio(totals.intent, customers), 2),
                efficiency: round_to(avg_roi, 1),
            }
        })
        .collect()
}
