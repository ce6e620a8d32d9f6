//! Clinical metric calculator: derived dose quantities and the plan
//! quality / device risk classifications.

use medphys_catalog::thresholds::{self, ThresholdTable, CONFORMITY_INDEX, GRADIENT_INDEX};
use medphys_core::models::pacemaker::{DistanceBucket, PacemakerSite, RiskTier};
use medphys_core::models::srs::Deviation;

/// Grade a conformity index against the bucket for the target volume.
pub fn classify_ci_deviation(volume_cc: f64, conformity_index: f64) -> Deviation {
    classify(&CONFORMITY_INDEX, volume_cc, conformity_index)
}

/// Grade a gradient index against the bucket for the target volume.
pub fn classify_gi_deviation(volume_cc: f64, gradient_index: f64) -> Deviation {
    classify(&GRADIENT_INDEX, volume_cc, gradient_index)
}

fn classify(table: &ThresholdTable, volume_cc: f64, value: f64) -> Deviation {
    // Validation restricts volume to (0, ∞), which the buckets cover.
    let Some(bucket) = table.bucket_for(volume_cc) else {
        panic!("{} threshold table has no bucket for {volume_cc} cc", table.metric);
    };
    if value >= bucket.major_at {
        Deviation::Major
    } else if value >= bucket.minor_at {
        Deviation::Minor
    } else {
        Deviation::None
    }
}

pub fn dose_per_fraction(dose_gy: f64, fractions: u32) -> f64 {
    dose_gy / f64::from(fractions)
}

/// Biologically effective dose, `nd(1 + d/(α/β))`.
pub fn bed(dose_gy: f64, fractions: u32, alpha_beta_gy: f64) -> f64 {
    let per_fraction = dose_per_fraction(dose_gy, fractions);
    dose_gy * (1.0 + per_fraction / alpha_beta_gy)
}

/// Equivalent dose in 2 Gy fractions, `D(d + α/β)/(2 + α/β)`.
pub fn eqd2(dose_gy: f64, fractions: u32, alpha_beta_gy: f64) -> f64 {
    let per_fraction = dose_per_fraction(dose_gy, fractions);
    dose_gy * (per_fraction + alpha_beta_gy) / (2.0 + alpha_beta_gy)
}

/// Volume of the target receiving the prescription dose.
pub fn covered_volume_cc(volume_cc: f64, coverage_pct: f64) -> f64 {
    volume_cc * coverage_pct / 100.0
}

/// Exact lookup of the device risk tier; `None` when the site has no
/// documented entry for the distance bucket.
pub fn classify_device_risk(site: PacemakerSite, distance_cm: f64) -> Option<RiskTier> {
    thresholds::device_risk(site, DistanceBucket::from_distance(distance_cm))
}
