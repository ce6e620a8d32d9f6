use medphys_core::models::beam::BeamEnergy;
use medphys_core::models::tbi::{DoseRateRange, LungBlocks, TbiSetup};
use medphys_core::range::FieldRange;

use crate::reference::{choice_set, numeric, preset, ReferenceData};
use crate::Modality;

pub const PRESCRIPTION_DOSE: FieldRange = FieldRange::positive_up_to(20.0);
pub const FRACTIONS: FieldRange = FieldRange::closed(1.0, 12.0);
pub const MACHINE_DOSE_RATE: FieldRange = FieldRange::positive_up_to(1400.0);

/// Total body irradiation at extended distance.
pub struct Tbi;

impl Modality for Tbi {
    fn id(&self) -> &str {
        "tbi"
    }

    fn name(&self) -> &str {
        "Total Body Irradiation"
    }

    fn payload_key(&self) -> &str {
        "tbi_data"
    }

    fn reference_data(&self) -> &ReferenceData {
        static DATA: std::sync::LazyLock<ReferenceData> = std::sync::LazyLock::new(|| {
            ReferenceData {
                choice_sets: vec![
                    choice_set::<TbiSetup>("setup", "Patient Setup"),
                    choice_set::<LungBlocks>("lung_blocks", "Lung Blocks"),
                    choice_set::<BeamEnergy>("energy", "Beam Energy"),
                    choice_set::<DoseRateRange>("dose_rate_range", "Midplane Dose Rate"),
                ],
                numeric_fields: vec![
                    numeric("prescription_dose", "Prescription Dose", Some("Gy"), PRESCRIPTION_DOSE),
                    numeric("fractions", "Fractions", None, FRACTIONS),
                    numeric(
                        "machine_dose_rate",
                        "Machine Dose Rate",
                        Some("MU/min"),
                        MACHINE_DOSE_RATE,
                    ),
                ],
                presets: vec![
                    preset("myeloablative", 12.0, 6, "2 Gy twice daily"),
                    preset("myeloablative", 13.2, 8, "1.65 Gy twice daily"),
                    preset("reduced intensity", 2.0, 1, "single fraction"),
                    preset("reduced intensity", 4.0, 2, "2 Gy daily"),
                ],
                ..Default::default()
            }
        });
        &DATA
    }
}
