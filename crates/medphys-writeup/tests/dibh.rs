use medphys_core::error::Constraint;
use medphys_core::models::common::CommonInfo;
use medphys_core::models::dibh::DibhInput;
use medphys_writeup::error::WriteupError;
use medphys_writeup::generators::dibh;

fn common() -> CommonInfo {
    CommonInfo::new("Haddad", "Novak")
}

fn input() -> DibhInput {
    DibhInput {
        treatment_site: "left breast".to_string(),
        dose: 40.05,
        fractions: 15,
        has_boost: false,
        boost_dose: None,
        boost_fractions: None,
        surface_system: "AlignRT".to_string(),
    }
}

#[test]
fn writeup_without_boost() {
    let writeup = dibh::generate(&common(), &input()).unwrap();
    assert!(writeup.text.contains("radiation treatment of the left breast"));
    assert!(writeup.text.contains("The AlignRT (Vision RT) surface imaging system"));
    assert!(writeup.text.contains("The prescription is 40.05 Gy in 15 fractions to the left breast."));
    assert!(!writeup.text.contains("boost"));
}

#[test]
fn boost_adds_total_dose() {
    let mut with_boost = input();
    with_boost.has_boost = true;
    with_boost.boost_dose = Some(10.0);
    with_boost.boost_fractions = Some(5);

    let writeup = dibh::generate(&common(), &with_boost).unwrap();
    assert!(writeup.text.contains(
        "A sequential boost of 10 Gy in 5 fractions will follow, for a total prescribed dose of 50.05 Gy."
    ));
}

#[test]
fn missing_boost_fields_fail_with_the_field_named() {
    let mut with_boost = input();
    with_boost.has_boost = true;
    with_boost.boost_fractions = Some(5);

    let err = dibh::generate(&common(), &with_boost).unwrap_err();
    let WriteupError::Validation(e) = err else {
        panic!("expected a validation error, got {err}");
    };
    assert_eq!(e.field, "dibh_data.boost_dose");
    assert_eq!(e.constraint, Constraint::Required);
}

#[test]
fn boost_values_without_flag_are_rejected() {
    let mut stray = input();
    stray.boost_fractions = Some(5);
    let err = dibh::validate(&stray).unwrap_err();
    assert_eq!(err.field, "dibh_data.boost_fractions");
    assert_eq!(err.constraint, Constraint::Absent);
}

#[test]
fn zero_boost_values_without_flag_are_accepted() {
    let mut zeroed = input();
    zeroed.boost_dose = Some(0.0);
    zeroed.boost_fractions = Some(0);
    let plan = dibh::validate(&zeroed).unwrap();
    assert_eq!(plan.boost, None);
}

#[test]
fn blank_physician_name_is_rejected() {
    let err = dibh::generate(&CommonInfo::new("", "Novak"), &input()).unwrap_err();
    assert!(err.to_string().contains("common_info.physician.name"));
}
