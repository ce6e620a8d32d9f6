use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::choice::ChoiceValue;

/// Prior-dose reconciliation payload (`prior_dose_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct PriorDoseInput {
    pub current_site: String,
    pub current_dose: f64,
    pub current_fractions: u32,
    pub prior_plans_available: bool,
    pub prior_courses: Vec<PriorCourseInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct PriorCourseInput {
    pub site: String,
    pub dose: f64,
    pub fractions: u32,
    pub treatment_date: jiff::civil::Date,
    pub overlap: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnatomicSite {
    Brain,
    HeadAndNeck,
    Breast,
    Thorax,
    Abdomen,
    Pelvis,
    Spine,
    Extremity,
}

impl ChoiceValue for AnatomicSite {
    const ALL: &'static [Self] = &[
        AnatomicSite::Brain,
        AnatomicSite::HeadAndNeck,
        AnatomicSite::Breast,
        AnatomicSite::Thorax,
        AnatomicSite::Abdomen,
        AnatomicSite::Pelvis,
        AnatomicSite::Spine,
        AnatomicSite::Extremity,
    ];

    fn label(self) -> &'static str {
        match self {
            AnatomicSite::Brain => "brain",
            AnatomicSite::HeadAndNeck => "head and neck",
            AnatomicSite::Breast => "breast",
            AnatomicSite::Thorax => "thorax",
            AnatomicSite::Abdomen => "abdomen",
            AnatomicSite::Pelvis => "pelvis",
            AnatomicSite::Spine => "spine",
            AnatomicSite::Extremity => "extremity",
        }
    }
}

/// Geometric overlap between a prior course and the current fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    None,
    Minimal,
    Partial,
    Significant,
}

impl ChoiceValue for Overlap {
    const ALL: &'static [Self] = &[
        Overlap::None,
        Overlap::Minimal,
        Overlap::Partial,
        Overlap::Significant,
    ];

    fn label(self) -> &'static str {
        match self {
            Overlap::None => "none",
            Overlap::Minimal => "minimal",
            Overlap::Partial => "partial",
            Overlap::Significant => "significant",
        }
    }
}
