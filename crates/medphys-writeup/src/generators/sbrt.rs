use medphys_catalog::modalities::sbrt::{ALPHA_BETA_GY, DOSE, FRACTIONS, PTV_COVERAGE, PTV_VOLUME};
use medphys_core::error::ValidationError;
use medphys_core::models::choice::ChoiceValue;
use medphys_core::models::common::{CommonInfo, GeneratedWriteup};
use medphys_core::models::sbrt::{MotionManagement, SbrtInput, SbrtSite};

use crate::error::WriteupError;
use crate::metrics;
use crate::render::{assemble, derived, doctor, fractions, quantity, PATIENT_PLACEHOLDER};
use crate::validate::{self, path};

const PAYLOAD: &str = "sbrt_data";

/// A validated SBRT request.
#[derive(Debug, Clone, PartialEq)]
pub struct SbrtPlan {
    pub site: SbrtSite,
    pub dose: f64,
    pub fractions: u32,
    pub motion_management: MotionManagement,
    pub ptv_volume_cc: f64,
    pub ptv_coverage_pct: f64,
}

pub fn validate(input: &SbrtInput) -> Result<SbrtPlan, ValidationError> {
    Ok(SbrtPlan {
        site: validate::choice(&path(PAYLOAD, "treatment_site"), &input.treatment_site)?,
        dose: validate::number(&path(PAYLOAD, "dose"), input.dose, DOSE)?,
        fractions: validate::count(&path(PAYLOAD, "fractions"), input.fractions, FRACTIONS)?,
        motion_management: validate::choice(
            &path(PAYLOAD, "motion_management"),
            &input.motion_management,
        )?,
        ptv_volume_cc: validate::number(
            &path(PAYLOAD, "ptv_volume_cc"),
            input.ptv_volume_cc,
            PTV_VOLUME,
        )?,
        ptv_coverage_pct: validate::number(
            &path(PAYLOAD, "ptv_coverage_pct"),
            input.ptv_coverage_pct,
            PTV_COVERAGE,
        )?,
    })
}

pub fn generate(common: &CommonInfo, input: &SbrtInput) -> Result<GeneratedWriteup, WriteupError> {
    validate::common_info(common)?;
    let plan = validate(input)?;

    Ok(assemble(&[
        introduction(common, &plan),
        treatment(&plan),
        closing(common),
    ]))
}

fn motion_sentence(motion: MotionManagement) -> &'static str {
    match motion {
        MotionManagement::None => "No motion management is required for this site.",
        MotionManagement::Itv => {
            "A four-dimensional CT was acquired at simulation and an internal target volume \
             (ITV) was generated to account for respiratory motion."
        }
        MotionManagement::BreathHold => {
            "The patient will be treated in breath-hold to limit respiratory motion of the target."
        }
        MotionManagement::AbdominalCompression => {
            "Abdominal compression was applied at simulation and will be reproduced at each \
             fraction to limit respiratory motion of the target."
        }
        MotionManagement::Gating => {
            "Respiratory gating will be used so that the beam is delivered only during a selected \
             phase of the breathing cycle."
        }
    }
}

fn introduction(common: &CommonInfo, plan: &SbrtPlan) -> String {
    format!(
        "{} requested a medical physics consultation for {PATIENT_PLACEHOLDER} for stereotactic \
         body radiation therapy (SBRT) to the {}. SBRT delivers a high dose per fraction with \
         steep dose gradients, which requires precise patient positioning and image guidance at \
         every fraction.",
        doctor(&common.physician),
        plan.site.label(),
    )
}

fn treatment(plan: &SbrtPlan) -> String {
    format!(
        "The prescription is {} Gy in {} ({} Gy per fraction), a biologically effective dose of \
         {} Gy for an α/β of {} Gy. The planning target volume is {} cc, and {}% of it receives \
         the prescription dose. {} A cone-beam CT will be acquired before each fraction to \
         verify the target position.",
        quantity(plan.dose),
        fractions(plan.fractions),
        derived(metrics::dose_per_fraction(plan.dose, plan.fractions)),
        derived(metrics::bed(plan.dose, plan.fractions, ALPHA_BETA_GY)),
        quantity(ALPHA_BETA_GY),
        quantity(plan.ptv_volume_cc),
        quantity(plan.ptv_coverage_pct),
        motion_sentence(plan.motion_management),
    )
}

fn closing(common: &CommonInfo) -> String {
    format!(
        "{}, medical physicist, reviewed the plan, the motion management approach and the image \
         guidance protocol. The physics team will be present for each fraction to verify image \
         registration before the beam is delivered.",
        doctor(&common.physicist),
    )
}
