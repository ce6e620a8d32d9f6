//! Threshold tables for plan quality and device risk classification.

use medphys_core::format::format_number;
use medphys_core::models::choice::ChoiceValue;
use medphys_core::models::pacemaker::{DistanceBucket, PacemakerSite, RiskTier};

use crate::reference::ReferenceTable;

/// A target-volume interval with the two ascending thresholds that split a
/// plan quality index into none / minor / major deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeBucket {
    pub min_cc: Option<f64>,
    pub min_inclusive: bool,
    pub max_cc: Option<f64>,
    pub max_inclusive: bool,
    /// Values at or above this are a minor deviation.
    pub minor_at: f64,
    /// Values at or above this are a major deviation.
    pub major_at: f64,
}

impl VolumeBucket {
    pub fn contains(&self, volume_cc: f64) -> bool {
        let above = match self.min_cc {
            Some(min) if self.min_inclusive => volume_cc >= min,
            Some(min) => volume_cc > min,
            None => true,
        };
        let below = match self.max_cc {
            Some(max) if self.max_inclusive => volume_cc <= max,
            Some(max) => volume_cc < max,
            None => true,
        };
        above && below
    }

    fn describe(&self) -> String {
        match (self.min_cc, self.max_cc) {
            (None, Some(max)) => format!("< {} cc", format_number(max)),
            (Some(min), None) => format!("> {} cc", format_number(min)),
            (Some(min), Some(max)) => {
                format!("{}-{} cc", format_number(min), format_number(max))
            }
            (None, None) => "any volume".to_string(),
        }
    }
}

/// A named set of non-overlapping volume buckets.
#[derive(Debug)]
pub struct ThresholdTable {
    pub metric: &'static str,
    pub buckets: [VolumeBucket; 3],
}

impl ThresholdTable {
    pub fn bucket_for(&self, volume_cc: f64) -> Option<&VolumeBucket> {
        self.buckets.iter().find(|b| b.contains(volume_cc))
    }

    pub fn to_reference_table(&self) -> ReferenceTable {
        ReferenceTable {
            name: format!("{} deviation thresholds", self.metric),
            columns: vec![
                "target volume".to_string(),
                "minor at".to_string(),
                "major at".to_string(),
            ],
            rows: self
                .buckets
                .iter()
                .map(|b| {
                    vec![
                        b.describe(),
                        format_number(b.minor_at),
                        format_number(b.major_at),
                    ]
                })
                .collect(),
        }
    }
}

const fn below(max_cc: f64, minor_at: f64, major_at: f64) -> VolumeBucket {
    VolumeBucket {
        min_cc: None,
        min_inclusive: false,
        max_cc: Some(max_cc),
        max_inclusive: false,
        minor_at,
        major_at,
    }
}

const fn between(min_cc: f64, max_cc: f64, minor_at: f64, major_at: f64) -> VolumeBucket {
    VolumeBucket {
        min_cc: Some(min_cc),
        min_inclusive: true,
        max_cc: Some(max_cc),
        max_inclusive: true,
        minor_at,
        major_at,
    }
}

const fn above(min_cc: f64, minor_at: f64, major_at: f64) -> VolumeBucket {
    VolumeBucket {
        min_cc: Some(min_cc),
        min_inclusive: false,
        max_cc: None,
        max_inclusive: false,
        minor_at,
        major_at,
    }
}

pub static CONFORMITY_INDEX: ThresholdTable = ThresholdTable {
    metric: "conformity index",
    buckets: [
        below(3.0, 2.0, 2.5),
        between(3.0, 30.0, 1.5, 1.8),
        above(30.0, 1.2, 1.5),
    ],
};

// The smallest bucket is strict: a 2 cc target is graded on the 2-10 cc row.
pub static GRADIENT_INDEX: ThresholdTable = ThresholdTable {
    metric: "gradient index",
    buckets: [
        below(2.0, 5.0, 7.0),
        between(2.0, 10.0, 3.5, 5.0),
        above(10.0, 3.0, 4.0),
    ],
};

/// CIED risk tier by treatment site and distance from field edge to device.
/// Combinations that cannot occur anatomically are not listed.
pub static DEVICE_RISK: &[(PacemakerSite, DistanceBucket, RiskTier)] = &[
    (PacemakerSite::Brain, DistanceBucket::Distant, RiskTier::Low),
    (PacemakerSite::HeadAndNeck, DistanceBucket::Near, RiskTier::High),
    (PacemakerSite::HeadAndNeck, DistanceBucket::Intermediate, RiskTier::Medium),
    (PacemakerSite::HeadAndNeck, DistanceBucket::Distant, RiskTier::Low),
    (PacemakerSite::Breast, DistanceBucket::Near, RiskTier::High),
    (PacemakerSite::Breast, DistanceBucket::Intermediate, RiskTier::Medium),
    (PacemakerSite::Breast, DistanceBucket::Distant, RiskTier::Low),
    (PacemakerSite::Thorax, DistanceBucket::Near, RiskTier::High),
    (PacemakerSite::Thorax, DistanceBucket::Intermediate, RiskTier::Medium),
    (PacemakerSite::Thorax, DistanceBucket::Distant, RiskTier::Low),
    (PacemakerSite::Abdomen, DistanceBucket::Intermediate, RiskTier::Medium),
    (PacemakerSite::Abdomen, DistanceBucket::Distant, RiskTier::Low),
    (PacemakerSite::Pelvis, DistanceBucket::Distant, RiskTier::Low),
    (PacemakerSite::Extremity, DistanceBucket::Near, RiskTier::High),
    (PacemakerSite::Extremity, DistanceBucket::Intermediate, RiskTier::Medium),
    (PacemakerSite::Extremity, DistanceBucket::Distant, RiskTier::Low),
];

/// Exact-match lookup; `None` when the combination is not in the table.
pub fn device_risk(site: PacemakerSite, distance: DistanceBucket) -> Option<RiskTier> {
    DEVICE_RISK
        .iter()
        .find(|(s, d, _)| *s == site && *d == distance)
        .map(|(_, _, tier)| *tier)
}

pub fn device_risk_table() -> ReferenceTable {
    ReferenceTable {
        name: "CIED risk by site and distance".to_string(),
        columns: vec![
            "treatment site".to_string(),
            "distance to device".to_string(),
            "risk".to_string(),
        ],
        rows: DEVICE_RISK
            .iter()
            .map(|(site, distance, tier)| {
                vec![
                    site.label().to_string(),
                    distance.label().to_string(),
                    tier.label().to_string(),
                ]
            })
            .collect(),
    }
}
