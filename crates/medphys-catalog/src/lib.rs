//! medphys-catalog
//!
//! Read-only reference data for every treatment modality: the choice sets
//! callers use to populate inputs, numeric field limits, fractionation
//! presets, and the threshold tables behind plan quality and device risk
//! classification. Everything here is immutable after first access.

pub mod error;
pub mod modalities;
pub mod reference;
pub mod thresholds;

use error::CatalogError;
use reference::ReferenceData;

/// Trait implemented by each supported treatment modality.
pub trait Modality: Send + Sync {
    /// Unique identifier (e.g., "tbi", "srs").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Total Body Irradiation").
    fn name(&self) -> &str;

    /// Key the modality payload travels under in a request (e.g., "tbi_data").
    fn payload_key(&self) -> &str;

    /// Choice sets, numeric limits, presets and tables for this modality.
    fn reference_data(&self) -> &ReferenceData;
}

static MODALITIES: [&dyn Modality; 7] = [
    &modalities::dibh::Dibh,
    &modalities::srs::Srs,
    &modalities::tbi::Tbi,
    &modalities::sbrt::Sbrt,
    &modalities::hdr::Hdr,
    &modalities::pacemaker::Pacemaker,
    &modalities::prior_dose::PriorDose,
];

/// Return all registered modalities.
pub fn all_modalities() -> &'static [&'static dyn Modality] {
    &MODALITIES
}

/// Look up a modality by ID.
pub fn get_modality(id: &str) -> Option<&'static dyn Modality> {
    MODALITIES.iter().copied().find(|m| m.id() == id)
}

/// Reference data for a modality, for populating caller-facing choices.
pub fn list_reference_data(id: &str) -> Result<&'static ReferenceData, CatalogError> {
    get_modality(id)
        .map(|m| m.reference_data())
        .ok_or_else(|| CatalogError::UnknownModality(id.to_string()))
}
