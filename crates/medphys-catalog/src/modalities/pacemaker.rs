use medphys_core::models::beam::BeamEnergy;
use medphys_core::models::pacemaker::{DeviceType, DeviceVendor, PacemakerSite};
use medphys_core::range::FieldRange;

use crate::reference::{choice_set, numeric, ReferenceData};
use crate::thresholds::device_risk_table;
use crate::Modality;

pub const DISTANCE: FieldRange = FieldRange::closed(0.0, 100.0);
pub const DOSE: FieldRange = FieldRange::positive_up_to(80.0);
pub const FRACTIONS: FieldRange = FieldRange::closed(1.0, 40.0);

/// Risk assessment for patients with a cardiac implantable electronic
/// device (pacemaker or ICD), following AAPM TG-203.
pub struct Pacemaker;

impl Modality for Pacemaker {
    fn id(&self) -> &str {
        "pacemaker"
    }

    fn name(&self) -> &str {
        "Pacemaker / CIED Risk Assessment"
    }

    fn payload_key(&self) -> &str {
        "pacemaker_data"
    }

    fn reference_data(&self) -> &ReferenceData {
        static DATA: std::sync::LazyLock<ReferenceData> = std::sync::LazyLock::new(|| {
            ReferenceData {
                choice_sets: vec![
                    choice_set::<DeviceVendor>("device_vendor", "Device Vendor"),
                    choice_set::<DeviceType>("device_type", "Device Type"),
                    choice_set::<PacemakerSite>("treatment_site", "Treatment Site"),
                    choice_set::<BeamEnergy>("energy", "Beam Energy"),
                ],
                numeric_fields: vec![
                    numeric("distance_cm", "Distance to Device", Some("cm"), DISTANCE),
                    numeric("dose", "Prescription Dose", Some("Gy"), DOSE),
                    numeric("fractions", "Fractions", None, FRACTIONS),
                ],
                tables: vec![device_risk_table()],
                ..Default::default()
            }
        });
        &DATA
    }
}
