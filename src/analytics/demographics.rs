//! Demographic breakdowns by gender, age, city and income

use super::grouping::OrderedGroups;
use super::models::{AgeGroupShare, CityShare, DemographicsSummary, GenderShare, IncomeShare};
use super::records::CustomerRecord;
use super::rounding::percentage;
use super::tables::{AGE_BANDS, TOP_CITY_LIMIT, UNKNOWN_LABEL};

fn count_by<'a, F>(records: &'a [CustomerRecord], key: F) -> Vec<(String, usize)>
where
    F: Fn(&'a CustomerRecord) -> &'a str,
{
    let mut groups: OrderedGroups<usize> = OrderedGroups::new();
    for record in records {
        *groups.entry(key(record)) += 1;
    }
    groups.into_iter().collect()
}

fn age_groups(records: &[CustomerRecord]) -> Vec<(String, usize)> {
    let mut counts = vec![0usize; AGE_BANDS.len() + 1];
    for record in records {
        let slot = AGE_BANDS
            .iter()
            .position(|def| def.band.contains(record.age()))
            .unwrap_or(AGE_BANDS.len());
        counts[slot] += 1;
    }

    AGE_BANDS
        .iter()
        .map(|def| def.label)
        .chain(std::iter::once(UNKNOWN_LABEL))
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| (label.to_string(), count))
        .collect()
}

fn is_male(record: &CustomerRecord) -> bool {
    record
        .gender
        .as_deref()
        .map(|g| g.eq_ignore_ascii_case("male") || g.eq_ignore_ascii_case("m"))
        .unwrap_or(false)
}

/// Largest group as `(label, share)`; the first group wins a tie
fn dominant(groups: &[(String, usize)], total: usize) -> (String, i64) {
    let mut best: Option<&(String, usize)> = None;
    for group in groups {
        let larger = match best {
            Some(current) => group.1 > current.1,
            None => true,
        };
        if larger {
            best = Some(group);
        }
    }
    best.map(|(label, count)| (label.clone(), percentage(*count, total)))
        .unwrap_or_default()
}

/// Gender, age, city and income distributions with their headline shares
pub fn demographic_breakdown(records: &[CustomerRecord]) -> DemographicsSummary {
    if records.is_empty() {
        return DemographicsSummary::default();
    }
    let total = records.len();

    let genders = count_by(records, |r| r.gender_or(UNKNOWN_LABEL));
    let ages = age_groups(records);
    let mut cities = count_by(records, |r| r.city_or(UNKNOWN_LABEL));
    cities.sort_by(|a, b| b.1.cmp(&a.1));
    cities.truncate(TOP_CITY_LIMIT);
    let incomes = count_by(records, |r| r.income_bracket_or(UNKNOWN_LABEL));

    let male = records.iter().filter(|r| is_male(r)).count();
    let (dominant_age_group, dominant_age_percentage) = dominant(&ages, total);
    let (top_city, top_city_percentage) = dominant(&cities, total);
    let (dominant_income_bracket, dominant_income_percentage) = dominant(&incomes, total);

    DemographicsSummary {
        gender_distribution: genders
            .into_iter()
            .map(|(gender, customers)| GenderShare {
                gender,
                customers,
                percentage: percentage(customers, total),
            })
            .collect(),
        age_distribution: ages
            .into_iter()
            .map(|(age_group, customers)| AgeGroupShare {
                age_group,
                customers,
                percentage: percentage(customers, total),
            })
            .collect(),
        city_distribution: cities
            .into_iter()
            .map(|(city, customers)| CityShare {
                city,
                customers,
                percentage: percentage(customers, total),
            })
            .collect(),
        income_distribution: incomes
            .into_iter()
            .map(|(bracket, customers)| IncomeShare {
                bracket,
                customers,
                percentage: percentage(customers, total),
            })
            .collect(),
        male_percentage: percentage(male, total),
        dominant_age_group,
        dominant_age_percentage,
        top_city,
        top_city_percentage,
        dominant_income_bracket,
        dominant_income_percentage,
    }
}
