//! Customer records as delivered by the customer table
//!
//! Source rows are sparse and loosely typed: numeric columns may arrive as
//! numbers, numeric-looking text, booleans or `null`. Deserialization coerces
//! every numeric column into `Option<f64>`, and the accessor methods apply the
//! zero-fill policy so transforms never see a missing value.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the customer table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(deserialize_with = "lenient::identifier")]
    pub customer_id: String,

    // Commerce
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_orders: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_spent: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_order_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_purchase_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub days_since_last_purchase: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub lifetime_value_predicted: Option<f64>,

    // Behavior and engagement
    #[serde(default, deserialize_with = "lenient::number")]
    pub page_views_30d: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub search_queries_30d: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cart_additions_30d: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cart_abandonments_30d: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_session_duration_sec: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_scroll_depth: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub mobile_usage_ratio: Option<f64>,

    // Channel and device
    #[serde(default, deserialize_with = "lenient::text")]
    pub primary_device: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub primary_traffic_source: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub preferred_channel: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub whatsapp_response_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub whatsapp_interactions_30d: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub email_open_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub email_click_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub emails_sent_30d: Option<f64>,

    // Predictive scores
    #[serde(default, deserialize_with = "lenient::number")]
    pub churn_risk_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub intent_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub intent_category: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub upsell_potential: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub predicted_campaign_roi: Option<f64>,

    // Category affinities
    #[serde(default, deserialize_with = "lenient::text")]
    pub primary_category: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub electronics_affinity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub fashion_affinity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub home_affinity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub beauty_affinity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub sports_affinity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub books_affinity: Option<f64>,

    // Demographics
    #[serde(default, deserialize_with = "lenient::number")]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub income_bracket: Option<String>,

    // Campaign metadata
    #[serde(default, deserialize_with = "lenient::text")]
    pub recommended_campaign: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub peak_shopping_month: Option<f64>,
}

/// Product categories carrying an affinity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Beauty,
    Sports,
    Books,
}

fn zero_fill(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

fn label_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}

impl CustomerRecord {
    /// Create a record with only its identifier set
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }

    pub fn total_orders(&self) -> f64 {
        zero_fill(self.total_orders)
    }

    pub fn total_spent(&self) -> f64 {
        zero_fill(self.total_spent)
    }

    pub fn days_since_last_purchase(&self) -> f64 {
        zero_fill(self.days_since_last_purchase)
    }

    pub fn page_views(&self) -> f64 {
        zero_fill(self.page_views_30d)
    }

    pub fn search_queries(&self) -> f64 {
        zero_fill(self.search_queries_30d)
    }

    pub fn cart_additions(&self) -> f64 {
        zero_fill(self.cart_additions_30d)
    }

    pub fn cart_abandonments(&self) -> f64 {
        zero_fill(self.cart_abandonments_30d)
    }

    pub fn session_duration(&self) -> f64 {
        zero_fill(self.avg_session_duration_sec)
    }

    pub fn scroll_depth(&self) -> f64 {
        zero_fill(self.avg_scroll_depth)
    }

    pub fn mobile_usage_ratio(&self) -> f64 {
        zero_fill(self.mobile_usage_ratio)
    }

    pub fn whatsapp_response_rate(&self) -> f64 {
        zero_fill(self.whatsapp_response_rate)
    }

    pub fn email_open_rate(&self) -> f64 {
        zero_fill(self.email_open_rate)
    }

    pub fn churn_risk(&self) -> f64 {
        zero_fill(self.churn_risk_score)
    }

    pub fn intent(&self) -> f64 {
        zero_fill(self.intent_score)
    }

    pub fn campaign_roi(&self) -> f64 {
        zero_fill(self.predicted_campaign_roi)
    }

    pub fn age(&self) -> f64 {
        zero_fill(self.age)
    }

    /// Lifetime value: the predicted value when set and non-zero, otherwise
    /// historical spend, otherwise zero.
    pub fn clv(&self) -> f64 {
        match self.lifetime_value_predicted {
            Some(predicted) if predicted != 0.0 => predicted,
            _ => self.total_spent(),
        }
    }

    /// Affinity score for a category, zero-filled
    pub fn affinity(&self, category: Category) -> f64 {
        zero_fill(match category {
            Category::Electronics => self.electronics_affinity,
            Category::Fashion => self.fashion_affinity,
            Category::Home => self.home_affinity,
            Category::Beauty => self.beauty_affinity,
            Category::Sports => self.sports_affinity,
            Category::Books => self.books_affinity,
        })
    }

    /// Peak shopping month as a 1-based index, when it names a real month
    pub fn peak_month(&self) -> Option<usize> {
        match self.peak_shopping_month {
            Some(month) if month.fract() == 0.0 && (1.0..=12.0).contains(&month) => {
                Some(month as usize)
            }
            _ => None,
        }
    }

    pub fn traffic_source_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        label_or(&self.primary_traffic_source, fallback)
    }

    pub fn device_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        label_or(&self.primary_device, fallback)
    }

    pub fn campaign_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        label_or(&self.recommended_campaign, fallback)
    }

    pub fn gender_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        label_or(&self.gender, fallback)
    }

    pub fn city_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        label_or(&self.city, fallback)
    }

    pub fn income_bracket_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        label_or(&self.income_bracket, fallback)
    }
}

/// Lenient deserializers for loosely typed table columns
pub mod lenient {
    use super::*;

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, numeric text or null")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(if v { 1.0 } else { 0.0 }))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v).filter(|n| n.is_finite()))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(parse_number(v))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(NumberVisitor)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            while seq.next_element::<de::IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            while map
                .next_entry::<de::IgnoredAny, de::IgnoredAny>()?
                .is_some()
            {}
            Ok(None)
        }
    }

    /// Parse numeric-looking text; anything else is treated as absent
    pub fn parse_number(text: &str) -> Option<f64> {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("text, a scalar or null")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let trimmed = v.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(TextVisitor)
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextVisitor)
    }

    /// Required identifier: text or an integer key, never empty
    pub fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_any(TextVisitor)?
            .ok_or_else(|| de::Error::custom("customer_id must not be empty"))
    }
}
