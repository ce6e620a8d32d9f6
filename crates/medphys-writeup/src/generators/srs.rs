use medphys_catalog::modalities::srs::{
    CONFORMITY, DOSE, FRACTIONS, GRADIENT, MAX_DOSE, PRESCRIPTION_ISODOSE, PTV_COVERAGE, VOLUME,
};
use medphys_core::error::ValidationError;
use medphys_core::models::choice::ChoiceValue;
use medphys_core::models::common::{CommonInfo, GeneratedWriteup};
use medphys_core::models::srs::{BrainSite, Deviation, LesionInput, SrsInput, TreatmentType};

use crate::error::WriteupError;
use crate::metrics;
use crate::render::{assemble, derived, doctor, fractions, quantity, PATIENT_PLACEHOLDER};
use crate::validate::{self, path};

const PAYLOAD: &str = "srs_data";

/// A validated lesion with its plan quality grades.
#[derive(Debug, Clone, PartialEq)]
pub struct LesionPlan {
    pub site: BrainSite,
    pub volume_cc: f64,
    pub treatment_type: TreatmentType,
    pub dose_gy: f64,
    pub fractions: u32,
    pub prescription_isodose_pct: f64,
    pub ptv_coverage_pct: f64,
    pub conformity_index: f64,
    pub gradient_index: f64,
    pub max_dose_pct: f64,
    pub ci_deviation: Deviation,
    pub gi_deviation: Deviation,
}

impl LesionPlan {
    pub fn has_deviation(&self) -> bool {
        self.ci_deviation != Deviation::None || self.gi_deviation != Deviation::None
    }
}

pub fn validate(input: &SrsInput) -> Result<Vec<LesionPlan>, ValidationError> {
    let lesions = validate::non_empty(&path(PAYLOAD, "lesions"), &input.lesions)?;
    lesions
        .iter()
        .enumerate()
        .map(|(index, lesion)| validate_lesion(index, lesion))
        .collect()
}

fn validate_lesion(index: usize, lesion: &LesionInput) -> Result<LesionPlan, ValidationError> {
    let field = |name: &str| format!("{PAYLOAD}.lesions[{index}].{name}");

    let site = validate::choice(&field("site"), &lesion.site)?;
    let volume_cc = validate::number(&field("volume_cc"), lesion.volume_cc, VOLUME)?;
    let treatment_type: TreatmentType =
        validate::choice(&field("treatment_type"), &lesion.treatment_type)?;
    let dose_gy = validate::number(&field("dose_gy"), lesion.dose_gy, DOSE)?;
    let fraction_count = validate::count(&field("fractions"), lesion.fractions, FRACTIONS)?;
    match treatment_type {
        TreatmentType::SingleFraction if fraction_count != 1 => {
            return Err(ValidationError::consistency(
                field("fractions"),
                format!("single-fraction treatment requires 1 fraction, got {fraction_count}"),
            ));
        }
        TreatmentType::MultiFraction if fraction_count < 2 => {
            return Err(ValidationError::consistency(
                field("fractions"),
                format!("multi-fraction treatment requires at least 2 fractions, got {fraction_count}"),
            ));
        }
        _ => {}
    }
    let prescription_isodose_pct = validate::number(
        &field("prescription_isodose_pct"),
        lesion.prescription_isodose_pct,
        PRESCRIPTION_ISODOSE,
    )?;
    let ptv_coverage_pct =
        validate::number(&field("ptv_coverage_pct"), lesion.ptv_coverage_pct, PTV_COVERAGE)?;
    let conformity_index =
        validate::number(&field("conformity_index"), lesion.conformity_index, CONFORMITY)?;
    let gradient_index =
        validate::number(&field("gradient_index"), lesion.gradient_index, GRADIENT)?;
    let max_dose_pct = validate::number(&field("max_dose_pct"), lesion.max_dose_pct, MAX_DOSE)?;

    Ok(LesionPlan {
        site,
        volume_cc,
        treatment_type,
        dose_gy,
        fractions: fraction_count,
        prescription_isodose_pct,
        ptv_coverage_pct,
        conformity_index,
        gradient_index,
        max_dose_pct,
        ci_deviation: metrics::classify_ci_deviation(volume_cc, conformity_index),
        gi_deviation: metrics::classify_gi_deviation(volume_cc, gradient_index),
    })
}

pub fn generate(common: &CommonInfo, input: &SrsInput) -> Result<GeneratedWriteup, WriteupError> {
    validate::common_info(common)?;
    let lesions = validate(input)?;

    let mut paragraphs = vec![introduction(common, lesions.len())];
    paragraphs.extend(
        lesions
            .iter()
            .enumerate()
            .map(|(index, lesion)| lesion_paragraph(index + 1, lesion)),
    );
    paragraphs.push(closing(common, &lesions));

    Ok(assemble(&paragraphs))
}

fn lesion_count(count: usize) -> String {
    if count == 1 {
        "a single lesion".to_string()
    } else {
        format!("{count} lesions")
    }
}

fn deviation_status(deviation: Deviation) -> &'static str {
    match deviation {
        Deviation::None => "within protocol",
        Deviation::Minor => "minor deviation",
        Deviation::Major => "major deviation",
    }
}

fn introduction(common: &CommonInfo, lesion_total: usize) -> String {
    format!(
        "{} requested a medical physics consultation for {PATIENT_PLACEHOLDER} for stereotactic \
         treatment of {} in the brain. The patient will be immobilized in a thermoplastic mask \
         and treated with frameless, image-guided stereotactic delivery.",
        doctor(&common.physician),
        lesion_count(lesion_total),
    )
}

fn lesion_paragraph(number: usize, lesion: &LesionPlan) -> String {
    format!(
        "Lesion {number}: the target in the {} measures {} cc and is planned for {} to {} Gy in \
         {}, prescribed to the {}% isodose line. The prescription dose covers {}% of the target \
         volume ({} cc) and the maximum dose is {}% of the prescription. The conformity index is \
         {} ({}) and the gradient index is {} ({}).",
        lesion.site.region(),
        quantity(lesion.volume_cc),
        lesion.treatment_type.description().unwrap_or(lesion.treatment_type.label()),
        quantity(lesion.dose_gy),
        fractions(lesion.fractions),
        quantity(lesion.prescription_isodose_pct),
        quantity(lesion.ptv_coverage_pct),
        derived(metrics::covered_volume_cc(lesion.volume_cc, lesion.ptv_coverage_pct)),
        quantity(lesion.max_dose_pct),
        quantity(lesion.conformity_index),
        deviation_status(lesion.ci_deviation),
        quantity(lesion.gradient_index),
        deviation_status(lesion.gi_deviation),
    )
}

/// `lesion 2 conformity index (minor)` for every non-none grade, in order.
fn deviation_list(lesions: &[LesionPlan]) -> Vec<String> {
    let mut noted = Vec::new();
    for (index, lesion) in lesions.iter().enumerate() {
        let grades = [
            ("conformity index", lesion.ci_deviation),
            ("gradient index", lesion.gi_deviation),
        ];
        for (metric, deviation) in grades {
            if deviation != Deviation::None {
                noted.push(format!("lesion {} {metric} ({})", index + 1, deviation.label()));
            }
        }
    }
    noted
}

fn closing(common: &CommonInfo, lesions: &[LesionPlan]) -> String {
    let review = if lesions.iter().any(LesionPlan::has_deviation) {
        format!(
            "The following plan quality deviations were noted: {}. These were reviewed with {}, \
             who accepted the plan given the target location and the proximity of critical \
             structures.",
            deviation_list(lesions).join("; "),
            doctor(&common.physician),
        )
    } else {
        "All conformity and gradient indices are within protocol guidelines.".to_string()
    };
    format!(
        "{review} {}, medical physicist, reviewed the plan and verified the treatment delivery \
         parameters prior to the first treatment.",
        doctor(&common.physicist),
    )
}
