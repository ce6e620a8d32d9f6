use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::choice::ChoiceValue;

/// Stereotactic radiosurgery payload (`srs_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct SrsInput {
    pub lesions: Vec<LesionInput>,
}

/// One intracranial target, in the order the caller lists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct LesionInput {
    pub site: String,
    pub volume_cc: f64,
    pub treatment_type: String,
    pub dose_gy: f64,
    pub fractions: u32,
    pub prescription_isodose_pct: f64,
    pub ptv_coverage_pct: f64,
    pub conformity_index: f64,
    pub gradient_index: f64,
    pub max_dose_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrainSite {
    LeftFrontal,
    RightFrontal,
    LeftParietal,
    RightParietal,
    LeftTemporal,
    RightTemporal,
    LeftOccipital,
    RightOccipital,
    LeftCerebellum,
    RightCerebellum,
    Brainstem,
    LeftThalamus,
    RightThalamus,
    CorpusCallosum,
}

impl BrainSite {
    /// Anatomical region named in the lesion paragraph.
    pub fn region(self) -> &'static str {
        match self {
            BrainSite::LeftFrontal => "left frontal lobe",
            BrainSite::RightFrontal => "right frontal lobe",
            BrainSite::LeftParietal => "left parietal lobe",
            BrainSite::RightParietal => "right parietal lobe",
            BrainSite::LeftTemporal => "left temporal lobe",
            BrainSite::RightTemporal => "right temporal lobe",
            BrainSite::LeftOccipital => "left occipital lobe",
            BrainSite::RightOccipital => "right occipital lobe",
            BrainSite::LeftCerebellum => "left cerebellar hemisphere",
            BrainSite::RightCerebellum => "right cerebellar hemisphere",
            BrainSite::Brainstem => "brainstem",
            BrainSite::LeftThalamus => "left thalamus",
            BrainSite::RightThalamus => "right thalamus",
            BrainSite::CorpusCallosum => "corpus callosum",
        }
    }
}

impl ChoiceValue for BrainSite {
    const ALL: &'static [Self] = &[
        BrainSite::LeftFrontal,
        BrainSite::RightFrontal,
        BrainSite::LeftParietal,
        BrainSite::RightParietal,
        BrainSite::LeftTemporal,
        BrainSite::RightTemporal,
        BrainSite::LeftOccipital,
        BrainSite::RightOccipital,
        BrainSite::LeftCerebellum,
        BrainSite::RightCerebellum,
        BrainSite::Brainstem,
        BrainSite::LeftThalamus,
        BrainSite::RightThalamus,
        BrainSite::CorpusCallosum,
    ];

    fn label(self) -> &'static str {
        match self {
            BrainSite::LeftFrontal => "left frontal",
            BrainSite::RightFrontal => "right frontal",
            BrainSite::LeftParietal => "left parietal",
            BrainSite::RightParietal => "right parietal",
            BrainSite::LeftTemporal => "left temporal",
            BrainSite::RightTemporal => "right temporal",
            BrainSite::LeftOccipital => "left occipital",
            BrainSite::RightOccipital => "right occipital",
            BrainSite::LeftCerebellum => "left cerebellum",
            BrainSite::RightCerebellum => "right cerebellum",
            BrainSite::Brainstem => "brainstem",
            BrainSite::LeftThalamus => "left thalamus",
            BrainSite::RightThalamus => "right thalamus",
            BrainSite::CorpusCallosum => "corpus callosum",
        }
    }

    fn description(self) -> Option<&'static str> {
        Some(self.region())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreatmentType {
    SingleFraction,
    MultiFraction,
}

impl ChoiceValue for TreatmentType {
    const ALL: &'static [Self] = &[TreatmentType::SingleFraction, TreatmentType::MultiFraction];

    fn label(self) -> &'static str {
        match self {
            TreatmentType::SingleFraction => "single-fraction",
            TreatmentType::MultiFraction => "multi-fraction",
        }
    }

    fn description(self) -> Option<&'static str> {
        Some(match self {
            TreatmentType::SingleFraction => "stereotactic radiosurgery (SRS)",
            TreatmentType::MultiFraction => "fractionated stereotactic radiotherapy (SRT)",
        })
    }
}

/// How far a plan quality index departs from its protocol value.
/// Ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Deviation {
    None,
    Minor,
    Major,
}

impl Deviation {
    pub fn label(self) -> &'static str {
        match self {
            Deviation::None => "none",
            Deviation::Minor => "minor",
            Deviation::Major => "major",
        }
    }
}
