use medphys_catalog::modalities::hdr::{CYLINDER_DIAMETER, DOSE, FRACTIONS};
use medphys_core::error::ValidationError;
use medphys_core::models::choice::ChoiceValue;
use medphys_core::models::common::{CommonInfo, GeneratedWriteup};
use medphys_core::models::hdr::{Applicator, HdrInput, HdrSite};

use crate::error::WriteupError;
use crate::render::{assemble, doctor, fractions, quantity, PATIENT_PLACEHOLDER};
use crate::validate::{self, path, Companion};

const PAYLOAD: &str = "hdr_data";

const DIAMETER_RULE: Companion<'static> = Companion {
    required_when: "applicator is vaginal cylinder",
    absent_when: "applicator is not vaginal cylinder",
};

/// A validated HDR request. `cylinder_diameter_cm` is set only for the
/// vaginal cylinder.
#[derive(Debug, Clone, PartialEq)]
pub struct HdrPlan {
    pub site: HdrSite,
    pub applicator: Applicator,
    pub cylinder_diameter_cm: Option<f64>,
    pub dose: f64,
    pub fractions: u32,
}

pub fn validate(input: &HdrInput) -> Result<HdrPlan, ValidationError> {
    let site: HdrSite = validate::choice(&path(PAYLOAD, "treatment_site"), &input.treatment_site)?;
    let applicator: Applicator = validate::choice(&path(PAYLOAD, "applicator"), &input.applicator)?;
    if !site.applicators().contains(&applicator) {
        let allowed: Vec<_> = site.applicators().iter().map(|a| a.label()).collect();
        return Err(ValidationError::consistency(
            path(PAYLOAD, "applicator"),
            format!(
                "'{}' is not used for {}; expected one of: {}",
                applicator.label(),
                site.label(),
                allowed.join(", ")
            ),
        ));
    }
    let cylinder_diameter_cm = validate::companion_number(
        &path(PAYLOAD, "cylinder_diameter_cm"),
        input.cylinder_diameter_cm,
        applicator.requires_diameter(),
        DIAMETER_RULE,
        CYLINDER_DIAMETER,
    )?;

    Ok(HdrPlan {
        site,
        applicator,
        cylinder_diameter_cm,
        dose: validate::number(&path(PAYLOAD, "dose"), input.dose, DOSE)?,
        fractions: validate::count(&path(PAYLOAD, "fractions"), input.fractions, FRACTIONS)?,
    })
}

pub fn generate(common: &CommonInfo, input: &HdrInput) -> Result<GeneratedWriteup, WriteupError> {
    validate::common_info(common)?;
    let plan = validate(input)?;

    Ok(assemble(&[
        introduction(common, &plan),
        treatment(&plan),
        closing(common),
    ]))
}

fn applicator_phrase(plan: &HdrPlan) -> String {
    match (plan.applicator, plan.cylinder_diameter_cm) {
        (Applicator::TandemAndOvoid, _) => "a tandem and ovoid applicator".to_string(),
        (Applicator::TandemAndRing, _) => "a tandem and ring applicator".to_string(),
        (Applicator::VaginalCylinder, Some(diameter)) => {
            format!("a {} cm diameter vaginal cylinder", quantity(diameter))
        }
        (Applicator::VaginalCylinder, None) => "a vaginal cylinder".to_string(),
        (Applicator::InterstitialNeedles, _) => "an interstitial needle implant".to_string(),
        (Applicator::MultiLumenBalloon, _) => "a multi-lumen balloon applicator".to_string(),
        (Applicator::SurfaceApplicator, _) => "a custom surface applicator".to_string(),
    }
}

fn prescription_point(applicator: Applicator) -> &'static str {
    match applicator {
        Applicator::TandemAndOvoid | Applicator::TandemAndRing => "prescribed to point A",
        Applicator::VaginalCylinder => {
            "prescribed to a depth of 0.5 cm from the cylinder surface"
        }
        Applicator::InterstitialNeedles => "prescribed to the clinical target volume",
        Applicator::MultiLumenBalloon => "prescribed to 1 cm from the balloon surface",
        Applicator::SurfaceApplicator => "prescribed to a depth of 3 mm below the skin surface",
    }
}

fn introduction(common: &CommonInfo, plan: &HdrPlan) -> String {
    format!(
        "{} requested a medical physics consultation for {PATIENT_PLACEHOLDER} for high dose rate \
         (HDR) brachytherapy of the {}.",
        doctor(&common.physician),
        plan.site.target(),
    )
}

fn treatment(plan: &HdrPlan) -> String {
    format!(
        "Treatment will be delivered with an Ir-192 HDR afterloader using {}. The prescription is \
         {} Gy in {}, {}. Applicator placement will be verified with imaging before each \
         fraction, and each plan will be independently checked before delivery.",
        applicator_phrase(plan),
        quantity(plan.dose),
        fractions(plan.fractions),
        prescription_point(plan.applicator),
    )
}

fn closing(common: &CommonInfo) -> String {
    format!(
        "{}, medical physicist, reviewed the plan and verified the source strength and dwell \
         times. A radiation survey of the patient and the treatment room will be performed after \
         each fraction.",
        doctor(&common.physicist),
    )
}
