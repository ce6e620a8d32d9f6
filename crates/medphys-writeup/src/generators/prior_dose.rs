use medphys_catalog::modalities::prior_dose::{ALPHA_BETA_GY, DOSE, FRACTIONS};
use medphys_core::error::ValidationError;
use medphys_core::models::choice::ChoiceValue;
use medphys_core::models::common::{CommonInfo, GeneratedWriteup};
use medphys_core::models::prior_dose::{AnatomicSite, Overlap, PriorCourseInput, PriorDoseInput};

use crate::error::WriteupError;
use crate::metrics;
use crate::render::{assemble, derived, doctor, fractions, quantity, PATIENT_PLACEHOLDER};
use crate::validate::{self, path};

const PAYLOAD: &str = "prior_dose_data";

#[derive(Debug, Clone, PartialEq)]
pub struct PriorDosePlan {
    pub current_site: AnatomicSite,
    pub current_dose: f64,
    pub current_fractions: u32,
    pub prior_plans_available: bool,
    pub prior_courses: Vec<PriorCourse>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriorCourse {
    pub site: AnatomicSite,
    pub dose: f64,
    pub fractions: u32,
    pub treatment_date: jiff::civil::Date,
    pub overlap: Overlap,
}

impl PriorDosePlan {
    pub fn current_eqd2(&self) -> f64 {
        metrics::eqd2(self.current_dose, self.current_fractions, ALPHA_BETA_GY)
    }

    /// Current course plus every prior course that overlaps it, or `None`
    /// when nothing overlaps.
    pub fn cumulative_eqd2(&self) -> Option<f64> {
        let overlapping: Vec<_> = self
            .prior_courses
            .iter()
            .filter(|c| c.overlap != Overlap::None)
            .collect();
        if overlapping.is_empty() {
            return None;
        }
        let prior: f64 = overlapping.iter().map(|c| c.eqd2()).sum();
        Some(self.current_eqd2() + prior)
    }
}

impl PriorCourse {
    pub fn eqd2(&self) -> f64 {
        metrics::eqd2(self.dose, self.fractions, ALPHA_BETA_GY)
    }
}

pub fn validate(input: &PriorDoseInput) -> Result<PriorDosePlan, ValidationError> {
    let current_site = validate::choice(&path(PAYLOAD, "current_site"), &input.current_site)?;
    let current_dose = validate::number(&path(PAYLOAD, "current_dose"), input.current_dose, DOSE)?;
    let current_fractions = validate::count(
        &path(PAYLOAD, "current_fractions"),
        input.current_fractions,
        FRACTIONS,
    )?;
    let courses = validate::non_empty(&path(PAYLOAD, "prior_courses"), &input.prior_courses)?;
    let prior_courses = courses
        .iter()
        .enumerate()
        .map(|(index, course)| validate_course(index, course))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PriorDosePlan {
        current_site,
        current_dose,
        current_fractions,
        prior_plans_available: input.prior_plans_available,
        prior_courses,
    })
}

fn validate_course(index: usize, course: &PriorCourseInput) -> Result<PriorCourse, ValidationError> {
    let field = |name: &str| format!("{PAYLOAD}.prior_courses[{index}].{name}");
    Ok(PriorCourse {
        site: validate::choice(&field("site"), &course.site)?,
        dose: validate::number(&field("dose"), course.dose, DOSE)?,
        fractions: validate::count(&field("fractions"), course.fractions, FRACTIONS)?,
        treatment_date: course.treatment_date,
        overlap: validate::choice(&field("overlap"), &course.overlap)?,
    })
}

pub fn generate(
    common: &CommonInfo,
    input: &PriorDoseInput,
) -> Result<GeneratedWriteup, WriteupError> {
    validate::common_info(common)?;
    let plan = validate(input)?;

    Ok(assemble(&[
        introduction(common, &plan),
        history(&plan),
        closing(common),
    ]))
}

fn course_count(count: usize) -> String {
    if count == 1 {
        "one prior course".to_string()
    } else {
        format!("{count} prior courses")
    }
}

fn overlap_phrase(overlap: Overlap) -> &'static str {
    match overlap {
        Overlap::None => "no overlap with the current treatment fields",
        Overlap::Minimal => "minimal overlap with the current treatment fields",
        Overlap::Partial => "partial overlap with the current treatment fields",
        Overlap::Significant => "significant overlap with the current treatment fields",
    }
}

fn records_sentence(prior_plans_available: bool) -> &'static str {
    if prior_plans_available {
        "The prior treatment plans were retrieved and registered to the current planning CT, and \
         the prior dose was reviewed as a composite."
    } else {
        "The prior treatment plans were not available, so the prior dose was estimated from the \
         treatment summaries."
    }
}

fn cumulative_sentence(plan: &PriorDosePlan) -> String {
    match plan.cumulative_eqd2() {
        Some(total) => format!(
            "Where the courses overlap, the cumulative EQD2 is estimated at {} Gy.",
            derived(total)
        ),
        None => "None of the prior courses overlap the current treatment fields, so no \
                 cumulative dose was computed."
            .to_string(),
    }
}

fn course_sentence(course: &PriorCourse) -> String {
    format!(
        "In {}, {} Gy in {} was delivered to the {} (EQD2 {} Gy), with {}.",
        course.treatment_date.strftime("%B %Y"),
        quantity(course.dose),
        fractions(course.fractions),
        course.site.label(),
        derived(course.eqd2()),
        overlap_phrase(course.overlap),
    )
}

fn introduction(common: &CommonInfo, plan: &PriorDosePlan) -> String {
    format!(
        "{} requested a medical physics consultation for {PATIENT_PLACEHOLDER} to evaluate prior \
         radiation treatment before a new course to the {}. The new course is planned as {} Gy \
         in {}, an EQD2 of {} Gy (α/β = {} Gy).",
        doctor(&common.physician),
        plan.current_site.label(),
        quantity(plan.current_dose),
        fractions(plan.current_fractions),
        derived(plan.current_eqd2()),
        quantity(ALPHA_BETA_GY),
    )
}

fn history(plan: &PriorDosePlan) -> String {
    let mut sentences = vec![format!(
        "The patient has received {} of radiation.",
        course_count(plan.prior_courses.len())
    )];
    sentences.extend(plan.prior_courses.iter().map(course_sentence));
    sentences.push(records_sentence(plan.prior_plans_available).to_string());
    sentences.push(cumulative_sentence(plan));
    sentences.join(" ")
}

fn closing(common: &CommonInfo) -> String {
    format!(
        "{}, medical physicist, reviewed the prior and current treatment plans with {}. Dose \
         limits for critical structures near the prior treatment fields were evaluated with the \
         prior dose taken into account.",
        doctor(&common.physicist),
        doctor(&common.physician),
    )
}
