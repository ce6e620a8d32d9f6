use medphys_core::models::prior_dose::{AnatomicSite, Overlap};
use medphys_core::range::FieldRange;

use crate::reference::{choice_set, numeric, ReferenceData, ReferenceTable};
use crate::Modality;

pub const DOSE: FieldRange = FieldRange::positive_up_to(80.0);
pub const FRACTIONS: FieldRange = FieldRange::closed(1.0, 40.0);

/// α/β used for late-responding normal tissue when summing courses.
pub const ALPHA_BETA_GY: f64 = 3.0;

/// Reconciliation of prior radiation courses with a planned re-treatment.
pub struct PriorDose;

impl Modality for PriorDose {
    fn id(&self) -> &str {
        "prior_dose"
    }

    fn name(&self) -> &str {
        "Prior Dose Evaluation"
    }

    fn payload_key(&self) -> &str {
        "prior_dose_data"
    }

    fn reference_data(&self) -> &ReferenceData {
        static DATA: std::sync::LazyLock<ReferenceData> = std::sync::LazyLock::new(|| {
            ReferenceData {
                choice_sets: vec![
                    choice_set::<AnatomicSite>("current_site", "Current Treatment Site"),
                    choice_set::<AnatomicSite>("prior_courses.site", "Prior Treatment Site"),
                    choice_set::<Overlap>("prior_courses.overlap", "Overlap With Current Fields"),
                ],
                numeric_fields: vec![
                    numeric("current_dose", "Current Dose", Some("Gy"), DOSE),
                    numeric("current_fractions", "Current Fractions", None, FRACTIONS),
                    numeric("prior_courses.dose", "Prior Dose", Some("Gy"), DOSE),
                    numeric("prior_courses.fractions", "Prior Fractions", None, FRACTIONS),
                ],
                tables: vec![ReferenceTable {
                    name: "Dose summation parameters".to_string(),
                    columns: vec!["quantity".to_string(), "value".to_string()],
                    rows: vec![vec![
                        "EQD2 alpha/beta".to_string(),
                        format!("{ALPHA_BETA_GY} Gy"),
                    ]],
                }],
                ..Default::default()
            }
        });
        &DATA
    }
}
