//! Static configuration tables for every fixed-band analysis
//!
//! Categories, risk bands, segments, value bands, channels and months are
//! declared once here and consumed by the transforms, so the definitions can
//! be inspected and tested on their own.

use super::records::{Category, CustomerRecord};

/// Affinity above this value marks a customer as a high-affinity buyer
pub const HIGH_AFFINITY_THRESHOLD: f64 = 0.7;

/// Sentinel label for a missing categorical value
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Sentinel label for a customer with no recommended campaign
pub const NO_CAMPAIGN_LABEL: &str = "No Campaign";

pub struct CategoryDef {
    pub category: Category,
    pub label: &'static str,
}

pub const CATEGORIES: [CategoryDef; 6] = [
    CategoryDef {
        category: Category::Electronics,
        label: "Electronics",
    },
    CategoryDef {
        category: Category::Fashion,
        label: "Fashion",
    },
    CategoryDef {
        category: Category::Home,
        label: "Home",
    },
    CategoryDef {
        category: Category::Beauty,
        label: "Beauty",
    },
    CategoryDef {
        category: Category::Sports,
        label: "Sports",
    },
    CategoryDef {
        category: Category::Books,
        label: "Books",
    },
];

/// A half-open numeric band `[min, max)`, optionally closed at the top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
    pub inclusive_max: bool,
}

impl Band {
    pub const fn half_open(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            inclusive_max: false,
        }
    }

    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            inclusive_max: true,
        }
    }

    pub const fn at_least(min: f64) -> Self {
        Self::half_open(min, f64::INFINITY)
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min {
            return false;
        }
        if self.inclusive_max {
            value <= self.max
        } else {
            value < self.max
        }
    }
}

pub struct ChurnBandDef {
    pub label: &'static str,
    pub band: Band,
    pub color: &'static str,
}

/// Churn risk bands; the last band is closed so a score of exactly 1 counts
pub const CHURN_BANDS: [ChurnBandDef; 4] = [
    ChurnBandDef {
        label: "Low Risk",
        band: Band::half_open(0.0, 0.3),
        color: "hsl(142, 76%, 36%)",
    },
    ChurnBandDef {
        label: "Medium Risk",
        band: Band::half_open(0.3, 0.6),
        color: "hsl(32, 95%, 44%)",
    },
    ChurnBandDef {
        label: "High Risk",
        band: Band::half_open(0.6, 0.8),
        color: "hsl(25, 95%, 53%)",
    },
    ChurnBandDef {
        label: "Critical Risk",
        band: Band::closed(0.8, 1.0),
        color: "hsl(0, 84%, 60%)",
    },
];

pub struct ClvBandDef {
    pub label: &'static str,
    pub band: Band,
}

pub const CLV_BANDS: [ClvBandDef; 5] = [
    ClvBandDef {
        label: "$0-100",
        band: Band::half_open(0.0, 100.0),
    },
    ClvBandDef {
        label: "$100-500",
        band: Band::half_open(100.0, 500.0),
    },
    ClvBandDef {
        label: "$500-1000",
        band: Band::half_open(500.0, 1000.0),
    },
    ClvBandDef {
        label: "$1000-2000",
        band: Band::half_open(1000.0, 2000.0),
    },
    ClvBandDef {
        label: "$2000+",
        band: Band::at_least(2000.0),
    },
];

/// RFM segment names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Champions,
    Loyal,
    NeedAttention,
    AtRisk,
    Lost,
}

pub struct SegmentDef {
    pub segment: Segment,
    pub label: &'static str,
    pub matches: fn(&CustomerRecord) -> bool,
}

impl SegmentDef {
    pub fn members<'a>(
        &self,
        records: &'a [CustomerRecord],
    ) -> impl Iterator<Item = &'a CustomerRecord> + 'a {
        let matches = self.matches;
        records.iter().filter(move |r| matches(r))
    }
}

fn is_champion(r: &CustomerRecord) -> bool {
    r.churn_risk() < 0.2 && r.total_spent() > 1000.0
}

fn is_loyal(r: &CustomerRecord) -> bool {
    r.churn_risk() < 0.3 && r.total_spent() > 500.0
}

fn needs_attention(r: &CustomerRecord) -> bool {
    (0.3..0.6).contains(&r.churn_risk())
}

fn is_at_risk(r: &CustomerRecord) -> bool {
    (0.6..0.8).contains(&r.churn_risk())
}

fn is_lost(r: &CustomerRecord) -> bool {
    r.churn_risk() >= 0.8
}

/// RFM segments. Predicates are independent, so a record may match more
/// than one segment (Champions are always Loyal as well).
pub const RFM_SEGMENTS: [SegmentDef; 5] = [
    SegmentDef {
        segment: Segment::Champions,
        label: "Champions",
        matches: is_champion,
    },
    SegmentDef {
        segment: Segment::Loyal,
        label: "Loyal",
        matches: is_loyal,
    },
    SegmentDef {
        segment: Segment::NeedAttention,
        label: "Need Attention",
        matches: needs_attention,
    },
    SegmentDef {
        segment: Segment::AtRisk,
        label: "At Risk",
        matches: is_at_risk,
    },
    SegmentDef {
        segment: Segment::Lost,
        label: "Lost",
        matches: is_lost,
    },
];

/// Look up an RFM segment definition
pub fn segment_def(segment: Segment) -> &'static SegmentDef {
    RFM_SEGMENTS
        .iter()
        .find(|def| def.segment == segment)
        .unwrap_or(&RFM_SEGMENTS[0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    WhatsApp,
    Email,
    Sms,
    Website,
}

pub struct ChannelDef {
    pub channel: Channel,
    pub label: &'static str,
}

pub const CHANNELS: [ChannelDef; 4] = [
    ChannelDef {
        channel: Channel::WhatsApp,
        label: "WhatsApp",
    },
    ChannelDef {
        channel: Channel::Email,
        label: "Email",
    },
    ChannelDef {
        channel: Channel::Sms,
        label: "SMS",
    },
    ChannelDef {
        channel: Channel::Website,
        label: "Website",
    },
];

/// Segment columns of the channel matrix with their estimated base response rate.
/// Members are selected with the RFM predicates, so At Risk is churn in [0.6, 0.8).
pub const CHANNEL_SEGMENTS: [(Segment, f64); 4] = [
    (Segment::Champions, 80.0),
    (Segment::Loyal, 60.0),
    (Segment::AtRisk, 35.0),
    (Segment::Lost, 15.0),
];

/// Maximum absolute perturbation applied to estimated response rates
pub const RESPONSE_NOISE_SPAN: f64 = 5.0;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub struct AgeBandDef {
    pub label: &'static str,
    pub band: Band,
}

/// Age groups in display order; ages that are absent or zero are "Unknown"
pub const AGE_BANDS: [AgeBandDef; 6] = [
    AgeBandDef {
        label: "Under 18",
        band: Band::half_open(f64::MIN_POSITIVE, 18.0),
    },
    AgeBandDef {
        label: "18-24",
        band: Band::half_open(18.0, 25.0),
    },
    AgeBandDef {
        label: "25-34",
        band: Band::half_open(25.0, 35.0),
    },
    AgeBandDef {
        label: "35-44",
        band: Band::half_open(35.0, 45.0),
    },
    AgeBandDef {
        label: "45-54",
        band: Band::half_open(45.0, 55.0),
    },
    AgeBandDef {
        label: "55+",
        band: Band::at_least(55.0),
    },
];

/// Cities beyond this rank are left out of the city distribution
pub const TOP_CITY_LIMIT: usize = 8;
