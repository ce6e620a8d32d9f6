use medphys_core::error::Constraint;
use medphys_core::models::common::CommonInfo;
use medphys_core::models::hdr::HdrInput;
use medphys_writeup::generators::hdr;

fn common() -> CommonInfo {
    CommonInfo::new("Petrov", "Yamamoto")
}

fn input(site: &str, applicator: &str, diameter: Option<f64>) -> HdrInput {
    HdrInput {
        treatment_site: site.to_string(),
        applicator: applicator.to_string(),
        cylinder_diameter_cm: diameter,
        dose: 21.0,
        fractions: 3,
    }
}

#[test]
fn vaginal_cylinder_reports_diameter() {
    let writeup =
        hdr::generate(&common(), &input("endometrium", "vaginal cylinder", Some(3.0))).unwrap();
    assert!(writeup.text.contains("HDR) brachytherapy of the vaginal cuff."));
    assert!(writeup.text.contains("using a 3 cm diameter vaginal cylinder"));
    assert!(writeup.text.contains("prescribed to a depth of 0.5 cm from the cylinder surface"));
}

#[test]
fn cervix_ring_prescribes_to_point_a() {
    let writeup = hdr::generate(&common(), &input("cervix", "tandem and ring", None)).unwrap();
    assert!(writeup.text.contains("a tandem and ring applicator"));
    assert!(writeup.text.contains("21 Gy in 3 fractions, prescribed to point A"));
}

#[test]
fn cylinder_without_diameter_is_rejected() {
    let err = hdr::validate(&input("endometrium", "vaginal cylinder", None)).unwrap_err();
    assert_eq!(err.field, "hdr_data.cylinder_diameter_cm");
    assert_eq!(err.constraint, Constraint::Required);
}

#[test]
fn diameter_outside_range_is_rejected() {
    let err = hdr::validate(&input("endometrium", "vaginal cylinder", Some(4.5))).unwrap_err();
    assert_eq!(err.field, "hdr_data.cylinder_diameter_cm");
    assert!(matches!(err.constraint, Constraint::Range { .. }));
}

#[test]
fn diameter_without_cylinder_is_rejected() {
    let err = hdr::validate(&input("cervix", "tandem and ovoid", Some(3.0))).unwrap_err();
    assert_eq!(err.constraint, Constraint::Absent);
}

#[test]
fn applicator_must_match_site() {
    let err = hdr::validate(&input("cervix", "vaginal cylinder", Some(3.0))).unwrap_err();
    assert_eq!(err.field, "hdr_data.applicator");
    assert_eq!(err.constraint, Constraint::Consistency);
    assert!(err.message.contains("tandem and ring, tandem and ovoid, interstitial needles"));
}
