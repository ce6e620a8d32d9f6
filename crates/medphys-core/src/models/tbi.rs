use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::choice::ChoiceValue;

/// Total body irradiation payload (`tbi_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct TbiInput {
    pub prescription_dose: f64,
    pub fractions: u32,
    pub setup: String,
    pub lung_blocks: String,
    pub energy: String,
    pub dose_rate_range: String,
    pub machine_dose_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TbiSetup {
    ApPa,
    Lateral,
}

impl ChoiceValue for TbiSetup {
    const ALL: &'static [Self] = &[TbiSetup::ApPa, TbiSetup::Lateral];

    fn label(self) -> &'static str {
        match self {
            TbiSetup::ApPa => "AP/PA",
            TbiSetup::Lateral => "Lateral",
        }
    }
}

/// Lung block thickness in half-value layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LungBlocks {
    None,
    OneHvl,
    TwoHvl,
    ThreeHvl,
}

impl ChoiceValue for LungBlocks {
    const ALL: &'static [Self] = &[
        LungBlocks::None,
        LungBlocks::OneHvl,
        LungBlocks::TwoHvl,
        LungBlocks::ThreeHvl,
    ];

    fn label(self) -> &'static str {
        match self {
            LungBlocks::None => "none",
            LungBlocks::OneHvl => "1 HVL",
            LungBlocks::TwoHvl => "2 HVL",
            LungBlocks::ThreeHvl => "3 HVL",
        }
    }
}

/// Midplane dose rate band delivered at the extended treatment distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoseRateRange {
    Low,
    Medium,
    High,
}

impl ChoiceValue for DoseRateRange {
    const ALL: &'static [Self] = &[DoseRateRange::Low, DoseRateRange::Medium, DoseRateRange::High];

    fn label(self) -> &'static str {
        match self {
            DoseRateRange::Low => "5-10 cGy/min",
            DoseRateRange::Medium => "10-15 cGy/min",
            DoseRateRange::High => "15-20 cGy/min",
        }
    }
}
