use medphys_core::models::common::CommonInfo;
use medphys_core::models::pacemaker::{PacemakerInput, RiskTier};
use medphys_writeup::error::WriteupError;
use medphys_writeup::generators::pacemaker;

fn common() -> CommonInfo {
    CommonInfo::new("Kowalski", "Adeyemi")
}

fn input(site: &str, distance_cm: f64, energy: &str) -> PacemakerInput {
    PacemakerInput {
        device_vendor: "Medtronic".to_string(),
        device_model: "Azure XT DR".to_string(),
        device_type: "ICD".to_string(),
        pacing_dependent: false,
        treatment_site: site.to_string(),
        distance_cm,
        dose: 60.0,
        fractions: 30,
        energy: energy.to_string(),
    }
}

#[test]
fn thorax_at_five_cm_is_medium_risk() {
    let plan = pacemaker::validate(&input("thorax", 5.0, "6 MV")).unwrap();
    assert_eq!(pacemaker::risk_tier(&plan).unwrap(), RiskTier::Medium);

    let writeup = pacemaker::generate(&common(), &input("thorax", 5.0, "6 MV")).unwrap();
    assert!(writeup.text.contains(
        "The patient has a Medtronic implantable cardioverter-defibrillator (ICD) (model Azure XT DR)."
    ));
    assert!(writeup.text.contains("this places the patient in the medium risk category"));
    assert!(writeup.text.contains("at the midpoint of treatment"));
    assert!(writeup.text.contains("The patient is not pacing dependent."));
    assert!(!writeup.text.contains("neutrons"));
}

#[test]
fn high_energy_beams_add_neutron_warning() {
    let writeup = pacemaker::generate(&common(), &input("breast", 12.0, "18 MV")).unwrap();
    assert!(writeup.text.contains("low risk category"));
    assert!(writeup.text.contains("Because 18 MV beams produce neutrons"));
}

#[test]
fn pacing_dependent_near_field_is_high_risk() {
    let mut near = input("head and neck", 2.0, "6 MV");
    near.pacing_dependent = true;
    let writeup = pacemaker::generate(&common(), &near).unwrap();
    assert!(writeup.text.contains("high risk category"));
    assert!(writeup.text.contains("The patient is pacing dependent"));
    assert!(writeup.text.contains("cardiology should be consulted"));
}

#[test]
fn undocumented_combination_is_a_lookup_error() {
    let err = pacemaker::generate(&common(), &input("pelvis", 5.0, "6 MV")).unwrap_err();
    match err {
        WriteupError::RiskLookup { site, distance_cm } => {
            assert_eq!(site, "pelvis");
            assert_eq!(distance_cm, 5.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_device_model_is_rejected() {
    let mut blank = input("thorax", 5.0, "6 MV");
    blank.device_model = "  ".to_string();
    let err = pacemaker::validate(&blank).unwrap_err();
    assert_eq!(err.field, "pacemaker_data.device_model");
}
