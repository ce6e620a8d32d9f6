use medphys_core::models::common::CommonInfo;
use medphys_core::models::sbrt::SbrtInput;
use medphys_writeup::generators::sbrt;

fn common() -> CommonInfo {
    CommonInfo::new("Moreau", "Iyer")
}

fn input(motion_management: &str) -> SbrtInput {
    SbrtInput {
        treatment_site: "lung".to_string(),
        dose: 50.0,
        fractions: 5,
        motion_management: motion_management.to_string(),
        ptv_volume_cc: 24.5,
        ptv_coverage_pct: 95.0,
    }
}

#[test]
fn reports_dose_per_fraction_and_bed() {
    let writeup = sbrt::generate(&common(), &input("4DCT/ITV")).unwrap();
    assert!(writeup.text.contains("stereotactic body radiation therapy (SBRT) to the lung"));
    assert!(writeup.text.contains(
        "The prescription is 50 Gy in 5 fractions (10 Gy per fraction), a biologically effective \
         dose of 100 Gy for an α/β of 10 Gy."
    ));
    assert!(writeup.text.contains("The planning target volume is 24.5 cc, and 95% of it"));
}

#[test]
fn motion_management_selects_sentence() {
    let itv = sbrt::generate(&common(), &input("4DCT/ITV")).unwrap();
    assert!(itv.text.contains("internal target volume (ITV)"));

    let none = sbrt::generate(&common(), &input("none")).unwrap();
    assert!(none.text.contains("No motion management is required for this site."));

    let gating = sbrt::generate(&common(), &input("respiratory gating")).unwrap();
    assert!(gating.text.contains("Respiratory gating will be used"));
}

#[test]
fn too_many_fractions_are_rejected() {
    let mut long_course = input("none");
    long_course.fractions = 10;
    let err = sbrt::validate(&long_course).unwrap_err();
    assert_eq!(err.field, "sbrt_data.fractions");
    assert_eq!(err.message, "value 10 is outside range [1, 8]");
}

#[test]
fn coverage_below_eighty_percent_is_rejected() {
    let mut under = input("none");
    under.ptv_coverage_pct = 75.0;
    let err = sbrt::validate(&under).unwrap_err();
    assert_eq!(err.field, "sbrt_data.ptv_coverage_pct");
}
