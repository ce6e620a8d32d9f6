use jiff::civil::date;
use medphys_core::models::common::CommonInfo;
use medphys_core::models::prior_dose::{PriorCourseInput, PriorDoseInput};
use medphys_writeup::generators::prior_dose;

fn common() -> CommonInfo {
    CommonInfo::new("Santos", "Berg")
}

fn course(site: &str, dose: f64, fractions: u32, overlap: &str) -> PriorCourseInput {
    PriorCourseInput {
        site: site.to_string(),
        dose,
        fractions,
        treatment_date: date(2019, 3, 15),
        overlap: overlap.to_string(),
    }
}

fn input(prior_courses: Vec<PriorCourseInput>) -> PriorDoseInput {
    PriorDoseInput {
        current_site: "brain".to_string(),
        current_dose: 30.0,
        current_fractions: 10,
        prior_plans_available: true,
        prior_courses,
    }
}

#[test]
fn overlapping_course_is_summed_in_eqd2() {
    let writeup =
        prior_dose::generate(&common(), &input(vec![course("brain", 60.0, 30, "significant")]))
            .unwrap();
    assert!(writeup.text.contains("30 Gy in 10 fractions, an EQD2 of 36 Gy (α/β = 3 Gy)"));
    assert!(writeup.text.contains("The patient has received one prior course of radiation."));
    assert!(writeup.text.contains(
        "In March 2019, 60 Gy in 30 fractions was delivered to the brain (EQD2 60 Gy), with \
         significant overlap with the current treatment fields."
    ));
    assert!(writeup.text.contains("the cumulative EQD2 is estimated at 96 Gy"));
}

#[test]
fn non_overlapping_courses_are_not_summed() {
    let writeup = prior_dose::generate(
        &common(),
        &input(vec![
            course("thorax", 45.0, 25, "none"),
            course("spine", 8.0, 1, "none"),
        ]),
    )
    .unwrap();
    assert!(writeup.text.contains("2 prior courses"));
    assert!(writeup.text.contains("no cumulative dose was computed"));
}

#[test]
fn only_overlapping_courses_count_toward_cumulative() {
    let plan = prior_dose::validate(&input(vec![
        course("brain", 60.0, 30, "partial"),
        course("thorax", 45.0, 25, "none"),
    ]))
    .unwrap();
    assert_eq!(plan.cumulative_eqd2(), Some(96.0));
}

#[test]
fn missing_plans_use_summary_estimate() {
    let mut without_plans = input(vec![course("brain", 60.0, 30, "minimal")]);
    without_plans.prior_plans_available = false;
    let writeup = prior_dose::generate(&common(), &without_plans).unwrap();
    assert!(writeup.text.contains("estimated from the treatment summaries"));
}

#[test]
fn courses_are_validated_by_index() {
    let err = prior_dose::validate(&input(vec![
        course("brain", 60.0, 30, "partial"),
        course("brain", 60.0, 30, "complete"),
    ]))
    .unwrap_err();
    assert_eq!(err.field, "prior_dose_data.prior_courses[1].overlap");
}

#[test]
fn prior_courses_are_required() {
    let err = prior_dose::validate(&input(vec![])).unwrap_err();
    assert_eq!(err.field, "prior_dose_data.prior_courses");
}
