use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::choice::ChoiceValue;

/// Deep inspiration breath-hold payload (`dibh_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct DibhInput {
    pub treatment_site: String,
    pub dose: f64,
    pub fractions: u32,
    pub has_boost: bool,
    pub boost_dose: Option<f64>,
    pub boost_fractions: Option<u32>,
    pub surface_system: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DibhSite {
    LeftBreast,
    RightBreast,
    LeftChestWall,
    RightChestWall,
    LeftBreastAndNodes,
}

impl ChoiceValue for DibhSite {
    const ALL: &'static [Self] = &[
        DibhSite::LeftBreast,
        DibhSite::RightBreast,
        DibhSite::LeftChestWall,
        DibhSite::RightChestWall,
        DibhSite::LeftBreastAndNodes,
    ];

    fn label(self) -> &'static str {
        match self {
            DibhSite::LeftBreast => "left breast",
            DibhSite::RightBreast => "right breast",
            DibhSite::LeftChestWall => "left chest wall",
            DibhSite::RightChestWall => "right chest wall",
            DibhSite::LeftBreastAndNodes => "left breast and regional nodes",
        }
    }
}

/// Surface imaging systems used to monitor the breath-hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceSystem {
    AlignRt,
    Catalyst,
    Identify,
}

impl ChoiceValue for SurfaceSystem {
    const ALL: &'static [Self] = &[
        SurfaceSystem::AlignRt,
        SurfaceSystem::Catalyst,
        SurfaceSystem::Identify,
    ];

    fn label(self) -> &'static str {
        match self {
            SurfaceSystem::AlignRt => "AlignRT",
            SurfaceSystem::Catalyst => "C-RAD Catalyst",
            SurfaceSystem::Identify => "IDENTIFY",
        }
    }

    fn description(self) -> Option<&'static str> {
        Some(match self {
            SurfaceSystem::AlignRt => "Vision RT",
            SurfaceSystem::Catalyst => "C-RAD",
            SurfaceSystem::Identify => "Varian",
        })
    }
}
