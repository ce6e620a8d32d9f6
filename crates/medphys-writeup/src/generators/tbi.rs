use medphys_catalog::modalities::tbi::{FRACTIONS, MACHINE_DOSE_RATE, PRESCRIPTION_DOSE};
use medphys_core::error::ValidationError;
use medphys_core::models::beam::BeamEnergy;
use medphys_core::models::choice::ChoiceValue;
use medphys_core::models::common::{CommonInfo, GeneratedWriteup};
use medphys_core::models::tbi::{DoseRateRange, LungBlocks, TbiInput, TbiSetup};

use crate::error::WriteupError;
use crate::metrics;
use crate::render::{assemble, derived, doctor, fractions, quantity, PATIENT_PLACEHOLDER};
use crate::validate::{self, path};

const PAYLOAD: &str = "tbi_data";

/// A validated TBI request.
#[derive(Debug, Clone, PartialEq)]
pub struct TbiPlan {
    pub prescription_dose: f64,
    pub fractions: u32,
    pub setup: TbiSetup,
    pub lung_blocks: LungBlocks,
    pub energy: BeamEnergy,
    pub dose_rate_range: DoseRateRange,
    pub machine_dose_rate: f64,
}

pub fn validate(input: &TbiInput) -> Result<TbiPlan, ValidationError> {
    Ok(TbiPlan {
        prescription_dose: validate::number(
            &path(PAYLOAD, "prescription_dose"),
            input.prescription_dose,
            PRESCRIPTION_DOSE,
        )?,
        fractions: validate::count(&path(PAYLOAD, "fractions"), input.fractions, FRACTIONS)?,
        setup: validate::choice(&path(PAYLOAD, "setup"), &input.setup)?,
        lung_blocks: validate::choice(&path(PAYLOAD, "lung_blocks"), &input.lung_blocks)?,
        energy: validate::choice(&path(PAYLOAD, "energy"), &input.energy)?,
        dose_rate_range: validate::choice(
            &path(PAYLOAD, "dose_rate_range"),
            &input.dose_rate_range,
        )?,
        machine_dose_rate: validate::number(
            &path(PAYLOAD, "machine_dose_rate"),
            input.machine_dose_rate,
            MACHINE_DOSE_RATE,
        )?,
    })
}

pub fn generate(common: &CommonInfo, input: &TbiInput) -> Result<GeneratedWriteup, WriteupError> {
    validate::common_info(common)?;
    let plan = validate(input)?;

    Ok(assemble(&[
        introduction(common, &plan),
        treatment(&plan),
        closing(common),
    ]))
}

/// Field arrangement as it reads in the treatment paragraph.
pub fn setup_phrase(setup: TbiSetup) -> &'static str {
    match setup {
        TbiSetup::ApPa => "two AP/PA",
        TbiSetup::Lateral => "two lateral",
    }
}

fn lung_block_sentence(blocks: LungBlocks) -> String {
    const COMPENSATION: &str = "A beam spoiler and custom compensators were fabricated to \
                                improve dose uniformity along the length of the patient";
    match blocks {
        LungBlocks::None => format!("{COMPENSATION}."),
        LungBlocks::OneHvl | LungBlocks::TwoHvl | LungBlocks::ThreeHvl => format!(
            "{COMPENSATION}, and {} lung blocks were fabricated to limit the dose to the lungs.",
            blocks.label()
        ),
    }
}

fn introduction(common: &CommonInfo, plan: &TbiPlan) -> String {
    format!(
        "{} requested a medical physics consultation for {PATIENT_PLACEHOLDER} for total body \
         irradiation (TBI) as part of the conditioning regimen prior to hematopoietic stem cell \
         transplant. The prescription is {} Gy in {} ({} Gy per fraction).",
        doctor(&common.physician),
        quantity(plan.prescription_dose),
        fractions(plan.fractions),
        derived(metrics::dose_per_fraction(plan.prescription_dose, plan.fractions)),
    )
}

fn treatment(plan: &TbiPlan) -> String {
    format!(
        "The patient will be treated at an extended source-to-surface distance with {} fields \
         using {} photons. The machine dose rate will be set to {} MU/min, giving a dose rate \
         of {} at the patient midplane. {} In vivo diode measurements will be taken during the \
         first fraction to verify the delivered dose.",
        setup_phrase(plan.setup),
        plan.energy.label(),
        quantity(plan.machine_dose_rate),
        plan.dose_rate_range.label(),
        lung_block_sentence(plan.lung_blocks),
    )
}

fn closing(common: &CommonInfo) -> String {
    format!(
        "{}, medical physicist, reviewed the treatment setup, the monitor unit calculations and \
         the compensator design. The physics team will be present for the first fraction to \
         verify patient positioning and in vivo dosimetry.",
        doctor(&common.physicist),
    )
}
