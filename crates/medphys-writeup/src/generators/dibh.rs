use medphys_catalog::modalities::dibh::{BOOST_DOSE, BOOST_FRACTIONS, DOSE, FRACTIONS};
use medphys_core::error::ValidationError;
use medphys_core::models::choice::ChoiceValue;
use medphys_core::models::common::{CommonInfo, GeneratedWriteup};
use medphys_core::models::dibh::{DibhInput, DibhSite, SurfaceSystem};

use crate::error::WriteupError;
use crate::render::{assemble, derived, doctor, fractions, quantity, PATIENT_PLACEHOLDER};
use crate::validate::{self, path, Companion};

const PAYLOAD: &str = "dibh_data";

const BOOST_RULE: Companion<'static> = Companion {
    required_when: "has_boost is true",
    absent_when: "has_boost is false",
};

/// A validated breath-hold request.
#[derive(Debug, Clone, PartialEq)]
pub struct DibhPlan {
    pub site: DibhSite,
    pub dose: f64,
    pub fractions: u32,
    pub boost: Option<Boost>,
    pub surface_system: SurfaceSystem,
}

/// Sequential boost course delivered after the main course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boost {
    pub dose: f64,
    pub fractions: u32,
}

pub fn validate(input: &DibhInput) -> Result<DibhPlan, ValidationError> {
    let site = validate::choice(&path(PAYLOAD, "treatment_site"), &input.treatment_site)?;
    let dose = validate::number(&path(PAYLOAD, "dose"), input.dose, DOSE)?;
    let fraction_count = validate::count(&path(PAYLOAD, "fractions"), input.fractions, FRACTIONS)?;

    let boost_dose = validate::companion_number(
        &path(PAYLOAD, "boost_dose"),
        input.boost_dose,
        input.has_boost,
        BOOST_RULE,
        BOOST_DOSE,
    )?;
    let boost_fractions = validate::companion_count(
        &path(PAYLOAD, "boost_fractions"),
        input.boost_fractions,
        input.has_boost,
        BOOST_RULE,
        BOOST_FRACTIONS,
    )?;
    let boost = match (boost_dose, boost_fractions) {
        (Some(dose), Some(fractions)) => Some(Boost { dose, fractions }),
        _ => None,
    };

    let surface_system = validate::choice(&path(PAYLOAD, "surface_system"), &input.surface_system)?;

    Ok(DibhPlan {
        site,
        dose,
        fractions: fraction_count,
        boost,
        surface_system,
    })
}

pub fn generate(common: &CommonInfo, input: &DibhInput) -> Result<GeneratedWriteup, WriteupError> {
    validate::common_info(common)?;
    let plan = validate(input)?;

    Ok(assemble(&[
        introduction(common, &plan),
        treatment(&plan),
        closing(common),
    ]))
}

fn boost_sentence(plan: &DibhPlan) -> String {
    match plan.boost {
        Some(boost) => format!(
            " A sequential boost of {} Gy in {} will follow, for a total prescribed dose of {} Gy.",
            quantity(boost.dose),
            fractions(boost.fractions),
            derived(plan.dose + boost.dose),
        ),
        None => String::new(),
    }
}

fn introduction(common: &CommonInfo, plan: &DibhPlan) -> String {
    format!(
        "{} requested a medical physics consultation for {PATIENT_PLACEHOLDER} to evaluate a deep \
         inspiration breath-hold (DIBH) technique for radiation treatment of the {}. Holding a \
         deep inspiration moves the heart away from the chest wall, reducing the dose delivered \
         to the heart and the ipsilateral lung.",
        doctor(&common.physician),
        plan.site.label(),
    )
}

fn treatment(plan: &DibhPlan) -> String {
    let vendor = plan
        .surface_system
        .description()
        .map(|v| format!(" ({v})"))
        .unwrap_or_default();
    format!(
        "The patient was simulated in the supine position with two CT scans, one acquired during \
         free breathing and one acquired at deep inspiration breath-hold, and the reproducibility \
         of the breath-hold was confirmed at simulation. The {}{vendor} surface imaging system \
         will monitor the breath-hold during treatment, and the beam will be held whenever the \
         chest surface moves outside of the gating window. The prescription is {} Gy in {} to \
         the {}.{}",
        plan.surface_system.label(),
        quantity(plan.dose),
        fractions(plan.fractions),
        plan.site.label(),
        boost_sentence(plan),
    )
}

fn closing(common: &CommonInfo) -> String {
    format!(
        "{}, medical physicist, reviewed the breath-hold plan and the surface imaging workflow \
         with the treating team. The physics team will be present for the first fraction to \
         verify breath-hold positioning and beam gating.",
        doctor(&common.physicist),
    )
}
