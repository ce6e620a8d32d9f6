use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::choice::ChoiceValue;

/// Cardiac implantable electronic device risk payload (`pacemaker_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct PacemakerInput {
    pub device_vendor: String,
    pub device_model: String,
    pub device_type: String,
    pub pacing_dependent: bool,
    pub treatment_site: String,
    pub distance_cm: f64,
    pub dose: f64,
    pub fractions: u32,
    pub energy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceVendor {
    Medtronic,
    BostonScientific,
    Abbott,
    Biotronik,
    MicroPort,
}

impl ChoiceValue for DeviceVendor {
    const ALL: &'static [Self] = &[
        DeviceVendor::Medtronic,
        DeviceVendor::BostonScientific,
        DeviceVendor::Abbott,
        DeviceVendor::Biotronik,
        DeviceVendor::MicroPort,
    ];

    fn label(self) -> &'static str {
        match self {
            DeviceVendor::Medtronic => "Medtronic",
            DeviceVendor::BostonScientific => "Boston Scientific",
            DeviceVendor::Abbott => "Abbott",
            DeviceVendor::Biotronik => "Biotronik",
            DeviceVendor::MicroPort => "MicroPort",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Pacemaker,
    Icd,
}

impl ChoiceValue for DeviceType {
    const ALL: &'static [Self] = &[DeviceType::Pacemaker, DeviceType::Icd];

    fn label(self) -> &'static str {
        match self {
            DeviceType::Pacemaker => "pacemaker",
            DeviceType::Icd => "ICD",
        }
    }

    fn description(self) -> Option<&'static str> {
        Some(match self {
            DeviceType::Pacemaker => "pacemaker",
            DeviceType::Icd => "implantable cardioverter-defibrillator (ICD)",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacemakerSite {
    Brain,
    HeadAndNeck,
    Breast,
    Thorax,
    Abdomen,
    Pelvis,
    Extremity,
}

impl ChoiceValue for PacemakerSite {
    const ALL: &'static [Self] = &[
        PacemakerSite::Brain,
        PacemakerSite::HeadAndNeck,
        PacemakerSite::Breast,
        PacemakerSite::Thorax,
        PacemakerSite::Abdomen,
        PacemakerSite::Pelvis,
        PacemakerSite::Extremity,
    ];

    fn label(self) -> &'static str {
        match self {
            PacemakerSite::Brain => "brain",
            PacemakerSite::HeadAndNeck => "head and neck",
            PacemakerSite::Breast => "breast",
            PacemakerSite::Thorax => "thorax",
            PacemakerSite::Abdomen => "abdomen",
            PacemakerSite::Pelvis => "pelvis",
            PacemakerSite::Extremity => "extremity",
        }
    }
}

/// Distance from the closest field edge to the device, bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DistanceBucket {
    /// Less than 3 cm.
    Near,
    /// 3 cm to 10 cm inclusive.
    Intermediate,
    /// More than 10 cm.
    Distant,
}

impl DistanceBucket {
    pub fn from_distance(distance_cm: f64) -> Self {
        if distance_cm < 3.0 {
            DistanceBucket::Near
        } else if distance_cm <= 10.0 {
            DistanceBucket::Intermediate
        } else {
            DistanceBucket::Distant
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DistanceBucket::Near => "< 3 cm",
            DistanceBucket::Intermediate => "3-10 cm",
            DistanceBucket::Distant => "> 10 cm",
        }
    }
}

/// Patient risk category for the device (AAPM TG-203).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}
