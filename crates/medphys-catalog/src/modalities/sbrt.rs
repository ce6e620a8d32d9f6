use medphys_core::models::sbrt::{MotionManagement, SbrtSite};
use medphys_core::range::FieldRange;

use crate::reference::{choice_set, numeric, preset, ReferenceData};
use crate::Modality;

pub const DOSE: FieldRange = FieldRange::positive_up_to(70.0);
pub const FRACTIONS: FieldRange = FieldRange::closed(1.0, 8.0);
pub const PTV_VOLUME: FieldRange = FieldRange::positive();
pub const PTV_COVERAGE: FieldRange = FieldRange::closed(80.0, 100.0);

/// α/β used for the tumour BED quoted in the write-up.
pub const ALPHA_BETA_GY: f64 = 10.0;

/// Stereotactic body radiation therapy (extracranial, 1-8 fractions).
pub struct Sbrt;

impl Modality for Sbrt {
    fn id(&self) -> &str {
        "sbrt"
    }

    fn name(&self) -> &str {
        "Stereotactic Body Radiation Therapy"
    }

    fn payload_key(&self) -> &str {
        "sbrt_data"
    }

    fn reference_data(&self) -> &ReferenceData {
        static DATA: std::sync::LazyLock<ReferenceData> = std::sync::LazyLock::new(|| {
            ReferenceData {
                choice_sets: vec![
                    choice_set::<SbrtSite>("treatment_site", "Treatment Site"),
                    choice_set::<MotionManagement>("motion_management", "Motion Management"),
                ],
                numeric_fields: vec![
                    numeric("dose", "Prescription Dose", Some("Gy"), DOSE),
                    numeric("fractions", "Fractions", None, FRACTIONS),
                    numeric("ptv_volume_cc", "PTV Volume", Some("cc"), PTV_VOLUME),
                    numeric("ptv_coverage_pct", "PTV Coverage", Some("%"), PTV_COVERAGE),
                ],
                presets: vec![
                    preset("lung", 54.0, 3, "peripheral lesion"),
                    preset("lung", 50.0, 5, "central lesion"),
                    preset("lung", 34.0, 1, "single fraction, peripheral lesion"),
                    preset("liver", 45.0, 3, "hepatic metastasis"),
                    preset("pancreas", 33.0, 5, "pancreatic adenocarcinoma"),
                    preset("adrenal gland", 40.0, 5, "adrenal metastasis"),
                    preset("kidney", 42.0, 3, "primary renal cell carcinoma"),
                    preset("prostate", 36.25, 5, "low and intermediate risk"),
                    preset("spine", 24.0, 2, "spinal metastasis"),
                    preset("spine", 27.0, 3, "spinal metastasis"),
                    preset("bone", 30.0, 5, "non-spine bone metastasis"),
                ],
                ..Default::default()
            }
        });
        &DATA
    }
}
