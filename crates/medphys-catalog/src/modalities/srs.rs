use medphys_core::models::srs::{BrainSite, TreatmentType};
use medphys_core::range::FieldRange;

use crate::reference::{choice_set, numeric, preset, ReferenceData};
use crate::thresholds::{CONFORMITY_INDEX, GRADIENT_INDEX};
use crate::Modality;

pub const VOLUME: FieldRange = FieldRange::positive();
pub const DOSE: FieldRange = FieldRange::positive();
pub const FRACTIONS: FieldRange = FieldRange::at_least(1.0);
pub const PRESCRIPTION_ISODOSE: FieldRange = FieldRange::closed(50.0, 100.0);
pub const PTV_COVERAGE: FieldRange = FieldRange::closed(80.0, 100.0);
pub const CONFORMITY: FieldRange = FieldRange::closed(0.01, 10.0);
pub const GRADIENT: FieldRange = FieldRange::closed(0.01, 20.0);
pub const MAX_DOSE: FieldRange = FieldRange::closed(100.0, 200.0);

/// Intracranial stereotactic radiosurgery, single or multiple lesions.
/// Conformity and gradient indices are graded against volume-dependent
/// thresholds.
pub struct Srs;

impl Modality for Srs {
    fn id(&self) -> &str {
        "srs"
    }

    fn name(&self) -> &str {
        "Stereotactic Radiosurgery"
    }

    fn payload_key(&self) -> &str {
        "srs_data"
    }

    fn reference_data(&self) -> &ReferenceData {
        static DATA: std::sync::LazyLock<ReferenceData> = std::sync::LazyLock::new(|| {
            ReferenceData {
                choice_sets: vec![
                    choice_set::<BrainSite>("lesions.site", "Lesion Site"),
                    choice_set::<TreatmentType>("lesions.treatment_type", "Treatment Type"),
                ],
                numeric_fields: vec![
                    numeric("lesions.volume_cc", "Target Volume", Some("cc"), VOLUME),
                    numeric("lesions.dose_gy", "Prescription Dose", Some("Gy"), DOSE),
                    numeric("lesions.fractions", "Fractions", None, FRACTIONS),
                    numeric(
                        "lesions.prescription_isodose_pct",
                        "Prescription Isodose",
                        Some("%"),
                        PRESCRIPTION_ISODOSE,
                    ),
                    numeric("lesions.ptv_coverage_pct", "PTV Coverage", Some("%"), PTV_COVERAGE),
                    numeric("lesions.conformity_index", "Conformity Index", None, CONFORMITY),
                    numeric("lesions.gradient_index", "Gradient Index", None, GRADIENT),
                    numeric("lesions.max_dose_pct", "Maximum Dose", Some("%"), MAX_DOSE),
                ],
                presets: vec![
                    preset("lesion up to 2 cm", 24.0, 1, "single-fraction SRS"),
                    preset("lesion 2.1-3 cm", 18.0, 1, "single-fraction SRS"),
                    preset("lesion 3.1-4 cm", 15.0, 1, "single-fraction SRS"),
                    preset("large lesion or resection cavity", 27.0, 3, "fractionated SRT"),
                    preset("large lesion or resection cavity", 30.0, 5, "fractionated SRT"),
                ],
                tables: vec![
                    CONFORMITY_INDEX.to_reference_table(),
                    GRADIENT_INDEX.to_reference_table(),
                ],
                ..Default::default()
            }
        });
        &DATA
    }
}
