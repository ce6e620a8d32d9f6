use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::choice::ChoiceValue;

/// HDR brachytherapy payload (`hdr_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct HdrInput {
    pub treatment_site: String,
    pub applicator: String,
    pub cylinder_diameter_cm: Option<f64>,
    pub dose: f64,
    pub fractions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HdrSite {
    Cervix,
    Endometrium,
    Prostate,
    Breast,
    Skin,
}

impl HdrSite {
    /// Applicators used for this site. The first entry is the default.
    pub fn applicators(self) -> &'static [Applicator] {
        match self {
            HdrSite::Cervix => &[
                Applicator::TandemAndRing,
                Applicator::TandemAndOvoid,
                Applicator::InterstitialNeedles,
            ],
            HdrSite::Endometrium => &[Applicator::VaginalCylinder],
            HdrSite::Prostate => &[Applicator::InterstitialNeedles],
            HdrSite::Breast => &[Applicator::MultiLumenBalloon, Applicator::InterstitialNeedles],
            HdrSite::Skin => &[Applicator::SurfaceApplicator],
        }
    }

    pub fn default_applicator(self) -> Applicator {
        self.applicators()[0]
    }

    /// The treated volume as named in the introduction.
    pub fn target(self) -> &'static str {
        match self {
            HdrSite::Cervix => "cervix",
            HdrSite::Endometrium => "vaginal cuff",
            HdrSite::Prostate => "prostate",
            HdrSite::Breast => "breast lumpectomy cavity",
            HdrSite::Skin => "skin",
        }
    }
}

impl ChoiceValue for HdrSite {
    const ALL: &'static [Self] = &[
        HdrSite::Cervix,
        HdrSite::Endometrium,
        HdrSite::Prostate,
        HdrSite::Breast,
        HdrSite::Skin,
    ];

    fn label(self) -> &'static str {
        match self {
            HdrSite::Cervix => "cervix",
            HdrSite::Endometrium => "endometrium",
            HdrSite::Prostate => "prostate",
            HdrSite::Breast => "breast",
            HdrSite::Skin => "skin",
        }
    }

    fn description(self) -> Option<&'static str> {
        Some(self.target())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicator {
    TandemAndOvoid,
    TandemAndRing,
    VaginalCylinder,
    InterstitialNeedles,
    MultiLumenBalloon,
    SurfaceApplicator,
}

impl Applicator {
    /// Only the vaginal cylinder comes in several diameters.
    pub fn requires_diameter(self) -> bool {
        matches!(self, Applicator::VaginalCylinder)
    }
}

impl ChoiceValue for Applicator {
    const ALL: &'static [Self] = &[
        Applicator::TandemAndOvoid,
        Applicator::TandemAndRing,
        Applicator::VaginalCylinder,
        Applicator::InterstitialNeedles,
        Applicator::MultiLumenBalloon,
        Applicator::SurfaceApplicator,
    ];

    fn label(self) -> &'static str {
        match self {
            Applicator::TandemAndOvoid => "tandem and ovoid",
            Applicator::TandemAndRing => "tandem and ring",
            Applicator::VaginalCylinder => "vaginal cylinder",
            Applicator::InterstitialNeedles => "interstitial needles",
            Applicator::MultiLumenBalloon => "multi-lumen balloon",
            Applicator::SurfaceApplicator => "surface applicator",
        }
    }
}
