use medphys_core::models::choice::ChoiceValue;
use medphys_core::models::hdr::{Applicator, HdrSite};
use medphys_core::range::FieldRange;

use crate::reference::{choice_set, numeric, preset, ChoiceDependency, ReferenceData};
use crate::Modality;

pub const CYLINDER_DIAMETER: FieldRange = FieldRange::closed(2.0, 4.0);
pub const DOSE: FieldRange = FieldRange::positive_up_to(50.0);
pub const FRACTIONS: FieldRange = FieldRange::closed(1.0, 10.0);

/// High dose rate brachytherapy with an Ir-192 afterloader.
pub struct Hdr;

impl Modality for Hdr {
    fn id(&self) -> &str {
        "hdr"
    }

    fn name(&self) -> &str {
        "HDR Brachytherapy"
    }

    fn payload_key(&self) -> &str {
        "hdr_data"
    }

    fn reference_data(&self) -> &ReferenceData {
        static DATA: std::sync::LazyLock<ReferenceData> = std::sync::LazyLock::new(|| {
            let dependencies = HdrSite::ALL
                .iter()
                .map(|site| ChoiceDependency {
                    field: "applicator".to_string(),
                    depends_on: "treatment_site".to_string(),
                    when: site.label().to_string(),
                    allowed: site
                        .applicators()
                        .iter()
                        .map(|a| a.label().to_string())
                        .collect(),
                    default: site.default_applicator().label().to_string(),
                })
                .collect();

            ReferenceData {
                choice_sets: vec![
                    choice_set::<HdrSite>("treatment_site", "Treatment Site"),
                    choice_set::<Applicator>("applicator", "Applicator"),
                ],
                dependencies,
                numeric_fields: vec![
                    numeric(
                        "cylinder_diameter_cm",
                        "Cylinder Diameter",
                        Some("cm"),
                        CYLINDER_DIAMETER,
                    ),
                    numeric("dose", "Prescription Dose", Some("Gy"), DOSE),
                    numeric("fractions", "Fractions", None, FRACTIONS),
                ],
                presets: vec![
                    preset("cervix", 28.0, 4, "definitive, with external beam"),
                    preset("cervix", 27.5, 5, "definitive, with external beam"),
                    preset("endometrium", 21.0, 3, "vaginal cuff, 0.5 cm depth"),
                    preset("endometrium", 24.0, 4, "vaginal cuff, surface"),
                    preset("prostate", 15.0, 1, "boost after external beam"),
                    preset("prostate", 27.0, 2, "monotherapy"),
                    preset("breast", 34.0, 10, "accelerated partial breast, twice daily"),
                    preset("skin", 40.0, 10, "superficial lesion"),
                ],
                ..Default::default()
            }
        });
        &DATA
    }
}
