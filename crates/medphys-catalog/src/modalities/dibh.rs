use medphys_core::models::dibh::{DibhSite, SurfaceSystem};
use medphys_core::range::FieldRange;

use crate::reference::{choice_set, numeric, preset, ReferenceData};
use crate::Modality;

pub const DOSE: FieldRange = FieldRange::positive_up_to(80.0);
pub const FRACTIONS: FieldRange = FieldRange::closed(1.0, 40.0);
pub const BOOST_DOSE: FieldRange = FieldRange::positive_up_to(30.0);
pub const BOOST_FRACTIONS: FieldRange = FieldRange::closed(1.0, 15.0);

/// Deep inspiration breath-hold for left-sided breast and chest wall
/// treatment, monitored with surface imaging.
pub struct Dibh;

impl Modality for Dibh {
    fn id(&self) -> &str {
        "dibh"
    }

    fn name(&self) -> &str {
        "Deep Inspiration Breath-Hold"
    }

    fn payload_key(&self) -> &str {
        "dibh_data"
    }

    fn reference_data(&self) -> &ReferenceData {
        static DATA: std::sync::LazyLock<ReferenceData> = std::sync::LazyLock::new(|| {
            ReferenceData {
                choice_sets: vec![
                    choice_set::<DibhSite>("treatment_site", "Treatment Site"),
                    choice_set::<SurfaceSystem>("surface_system", "Surface Imaging System"),
                ],
                numeric_fields: vec![
                    numeric("dose", "Prescription Dose", Some("Gy"), DOSE),
                    numeric("fractions", "Fractions", None, FRACTIONS),
                    numeric("boost_dose", "Boost Dose", Some("Gy"), BOOST_DOSE),
                    numeric("boost_fractions", "Boost Fractions", None, BOOST_FRACTIONS),
                ],
                presets: vec![
                    preset("whole breast", 40.05, 15, "moderate hypofractionation"),
                    preset("whole breast", 42.56, 16, "Ontario hypofractionation"),
                    preset("whole breast", 26.0, 5, "FAST-Forward"),
                    preset("breast or chest wall with nodes", 50.0, 25, "conventional"),
                    preset("boost", 10.0, 5, "sequential tumor bed boost"),
                    preset("boost", 16.0, 8, "sequential tumor bed boost"),
                ],
                ..Default::default()
            }
        });
        &DATA
    }
}
