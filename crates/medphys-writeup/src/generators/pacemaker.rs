use medphys_catalog::modalities::pacemaker::{DISTANCE, DOSE, FRACTIONS};
use medphys_core::error::ValidationError;
use medphys_core::models::beam::BeamEnergy;
use medphys_core::models::choice::ChoiceValue;
use medphys_core::models::common::{CommonInfo, GeneratedWriteup};
use medphys_core::models::pacemaker::{
    DeviceType, DeviceVendor, PacemakerInput, PacemakerSite, RiskTier,
};

use crate::error::WriteupError;
use crate::metrics;
use crate::render::{assemble, doctor, fractions, quantity, PATIENT_PLACEHOLDER};
use crate::validate::{self, path};

const PAYLOAD: &str = "pacemaker_data";

/// A validated CIED request. The risk tier is looked up separately since a
/// missing table entry is not a field error.
#[derive(Debug, Clone, PartialEq)]
pub struct PacemakerPlan {
    pub vendor: DeviceVendor,
    pub model: String,
    pub device_type: DeviceType,
    pub pacing_dependent: bool,
    pub site: PacemakerSite,
    pub distance_cm: f64,
    pub dose: f64,
    pub fractions: u32,
    pub energy: BeamEnergy,
}

pub fn validate(input: &PacemakerInput) -> Result<PacemakerPlan, ValidationError> {
    Ok(PacemakerPlan {
        vendor: validate::choice(&path(PAYLOAD, "device_vendor"), &input.device_vendor)?,
        model: validate::non_blank(&path(PAYLOAD, "device_model"), &input.device_model)?
            .to_string(),
        device_type: validate::choice(&path(PAYLOAD, "device_type"), &input.device_type)?,
        pacing_dependent: input.pacing_dependent,
        site: validate::choice(&path(PAYLOAD, "treatment_site"), &input.treatment_site)?,
        distance_cm: validate::number(&path(PAYLOAD, "distance_cm"), input.distance_cm, DISTANCE)?,
        dose: validate::number(&path(PAYLOAD, "dose"), input.dose, DOSE)?,
        fractions: validate::count(&path(PAYLOAD, "fractions"), input.fractions, FRACTIONS)?,
        energy: validate::choice(&path(PAYLOAD, "energy"), &input.energy)?,
    })
}

/// Risk tier for a validated plan.
pub fn risk_tier(plan: &PacemakerPlan) -> Result<RiskTier, WriteupError> {
    metrics::classify_device_risk(plan.site, plan.distance_cm).ok_or_else(|| {
        WriteupError::RiskLookup {
            site: plan.site.label().to_string(),
            distance_cm: plan.distance_cm,
        }
    })
}

pub fn generate(
    common: &CommonInfo,
    input: &PacemakerInput,
) -> Result<GeneratedWriteup, WriteupError> {
    validate::common_info(common)?;
    let plan = validate(input)?;
    let tier = risk_tier(&plan)?;

    Ok(assemble(&[
        introduction(common, &plan),
        assessment(&plan, tier),
        closing(common),
    ]))
}

fn pacing_sentence(pacing_dependent: bool) -> &'static str {
    if pacing_dependent {
        "The patient is pacing dependent, so a temporary pacing plan must be in place and a \
         magnet and crash cart must be available during each fraction."
    } else {
        "The patient is not pacing dependent."
    }
}

fn monitoring_sentence(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => {
            "For this risk category the device should be interrogated before the first fraction \
             and after the final fraction."
        }
        RiskTier::Medium => {
            "For this risk category the device should be interrogated before the first fraction, \
             at the midpoint of treatment and after the final fraction, and the patient should be \
             monitored with ECG during each fraction."
        }
        RiskTier::High => {
            "For this risk category the device should be interrogated before the first fraction, \
             weekly during treatment and after the final fraction, the patient should be \
             monitored with ECG during each fraction, and cardiology should be consulted before \
             treatment begins. In vivo dosimetry at the device location is recommended on the \
             first fraction."
        }
    }
}

fn neutron_sentence(energy: BeamEnergy) -> String {
    if energy.produces_neutrons() {
        format!(
            " Because {} beams produce neutrons, which can reset or damage the device, the \
             physics team recommends planning with 10 MV or lower where clinically feasible.",
            energy.label()
        )
    } else {
        String::new()
    }
}

fn introduction(common: &CommonInfo, plan: &PacemakerPlan) -> String {
    format!(
        "{} requested a medical physics consultation for {PATIENT_PLACEHOLDER} to assess the risk \
         to the patient's cardiac implantable electronic device (CIED) during radiation \
         treatment. The patient has a {} {} (model {}).",
        doctor(&common.physician),
        plan.vendor.label(),
        plan.device_type.description().unwrap_or(plan.device_type.label()),
        plan.model,
    )
}

fn assessment(plan: &PacemakerPlan, tier: RiskTier) -> String {
    format!(
        "The planned treatment is {} Gy in {} to the {} using {} photons, with the closest field \
         edge {} cm from the device. Following the AAPM TG-203 guideline, this places the \
         patient in the {} risk category. {} {}{}",
        quantity(plan.dose),
        fractions(plan.fractions),
        plan.site.label(),
        plan.energy.label(),
        quantity(plan.distance_cm),
        tier.label(),
        pacing_sentence(plan.pacing_dependent),
        monitoring_sentence(tier),
        neutron_sentence(plan.energy),
    )
}

fn closing(common: &CommonInfo) -> String {
    format!(
        "{}, medical physicist, reviewed the device location relative to the treatment fields. \
         These recommendations were communicated to {} and the cardiology device clinic.",
        doctor(&common.physicist),
        doctor(&common.physician),
    )
}
