use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::choice::ChoiceValue;

/// Stereotactic body radiation therapy payload (`sbrt_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct SbrtInput {
    pub treatment_site: String,
    pub dose: f64,
    pub fractions: u32,
    pub motion_management: String,
    pub ptv_volume_cc: f64,
    pub ptv_coverage_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SbrtSite {
    Lung,
    Liver,
    Pancreas,
    Adrenal,
    Kidney,
    Prostate,
    Spine,
    Bone,
}

impl ChoiceValue for SbrtSite {
    const ALL: &'static [Self] = &[
        SbrtSite::Lung,
        SbrtSite::Liver,
        SbrtSite::Pancreas,
        SbrtSite::Adrenal,
        SbrtSite::Kidney,
        SbrtSite::Prostate,
        SbrtSite::Spine,
        SbrtSite::Bone,
    ];

    fn label(self) -> &'static str {
        match self {
            SbrtSite::Lung => "lung",
            SbrtSite::Liver => "liver",
            SbrtSite::Pancreas => "pancreas",
            SbrtSite::Adrenal => "adrenal gland",
            SbrtSite::Kidney => "kidney",
            SbrtSite::Prostate => "prostate",
            SbrtSite::Spine => "spine",
            SbrtSite::Bone => "bone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionManagement {
    None,
    Itv,
    BreathHold,
    AbdominalCompression,
    Gating,
}

impl ChoiceValue for MotionManagement {
    const ALL: &'static [Self] = &[
        MotionManagement::None,
        MotionManagement::Itv,
        MotionManagement::BreathHold,
        MotionManagement::AbdominalCompression,
        MotionManagement::Gating,
    ];

    fn label(self) -> &'static str {
        match self {
            MotionManagement::None => "none",
            MotionManagement::Itv => "4DCT/ITV",
            MotionManagement::BreathHold => "breath-hold",
            MotionManagement::AbdominalCompression => "abdominal compression",
            MotionManagement::Gating => "respiratory gating",
        }
    }
}
