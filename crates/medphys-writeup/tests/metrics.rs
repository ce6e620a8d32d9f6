use medphys_core::models::pacemaker::{PacemakerSite, RiskTier};
use medphys_core::models::srs::Deviation;
use medphys_writeup::metrics::{
    bed, classify_ci_deviation, classify_device_risk, classify_gi_deviation, covered_volume_cc,
    dose_per_fraction, eqd2,
};

#[test]
fn ci_bucket_edges() {
    // 3 cc and 30 cc both belong to the middle bucket (1.5 / 1.8).
    assert_eq!(classify_ci_deviation(2.9, 1.6), Deviation::None);
    assert_eq!(classify_ci_deviation(3.0, 1.6), Deviation::Minor);
    assert_eq!(classify_ci_deviation(30.0, 1.3), Deviation::None);
    assert_eq!(classify_ci_deviation(30.0001, 1.3), Deviation::Minor);
}

#[test]
fn thresholds_are_inclusive() {
    assert_eq!(classify_ci_deviation(10.0, 1.5), Deviation::Minor);
    assert_eq!(classify_ci_deviation(10.0, 1.8), Deviation::Major);
    assert_eq!(classify_gi_deviation(50.0, 3.0), Deviation::Minor);
    assert_eq!(classify_gi_deviation(50.0, 4.0), Deviation::Major);
}

#[test]
fn grade_never_decreases_as_index_rises() {
    for volume in [0.5, 2.0, 3.0, 15.0, 30.0, 45.0] {
        let mut previous = Deviation::None;
        for step in 0..60 {
            let index = 1.0 + f64::from(step) * 0.1;
            let ci = classify_ci_deviation(volume, index);
            assert!(ci >= previous, "CI grade dropped at {volume} cc, index {index}");
            previous = ci;
        }
    }
}

#[test]
fn gi_small_bucket_is_strict() {
    assert_eq!(classify_gi_deviation(1.99, 5.0), Deviation::Minor);
    assert_eq!(classify_gi_deviation(2.0, 5.0), Deviation::Major);
    assert_eq!(classify_gi_deviation(10.0, 3.5), Deviation::Minor);
    assert_eq!(classify_gi_deviation(10.5, 3.5), Deviation::Minor);
    assert_eq!(classify_gi_deviation(10.5, 2.9), Deviation::None);
}

#[test]
fn derived_doses() {
    assert_eq!(dose_per_fraction(50.0, 5), 10.0);
    assert_eq!(bed(50.0, 5, 10.0), 100.0);
    assert_eq!(eqd2(30.0, 10, 3.0), 36.0);
    assert_eq!(eqd2(60.0, 30, 3.0), 60.0);
    assert_eq!(covered_volume_cc(20.0, 95.0), 19.0);
}

#[test]
fn device_risk_by_distance() {
    assert_eq!(classify_device_risk(PacemakerSite::Thorax, 2.9), Some(RiskTier::High));
    assert_eq!(classify_device_risk(PacemakerSite::Thorax, 3.0), Some(RiskTier::Medium));
    assert_eq!(classify_device_risk(PacemakerSite::Thorax, 10.0), Some(RiskTier::Medium));
    assert_eq!(classify_device_risk(PacemakerSite::Thorax, 10.1), Some(RiskTier::Low));
    assert_eq!(classify_device_risk(PacemakerSite::Pelvis, 5.0), None);
}
