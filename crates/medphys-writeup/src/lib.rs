//! medphys-writeup
//!
//! Turns a validated modality payload into the narrative physics
//! consultation write-up. Generation is pure and deterministic: the same
//! request always produces the same text, and nothing is persisted.

pub mod error;
pub mod generators;
pub mod metrics;
pub mod render;
pub mod validate;

use medphys_catalog::reference::ReferenceData;
use medphys_core::models::common::{CommonInfo, GeneratedWriteup};
use medphys_core::models::request::{ModalityInput, WriteupRequest};

use error::WriteupError;

/// Generate the write-up for one modality payload.
pub fn generate(
    common: &CommonInfo,
    input: &ModalityInput,
) -> Result<GeneratedWriteup, WriteupError> {
    let modality = input.modality_id();
    tracing::debug!(modality, "generating write-up");

    let result = match input {
        ModalityInput::Dibh(data) => generators::dibh::generate(common, data),
        ModalityInput::Srs(data) => generators::srs::generate(common, data),
        ModalityInput::Tbi(data) => generators::tbi::generate(common, data),
        ModalityInput::Sbrt(data) => generators::sbrt::generate(common, data),
        ModalityInput::Hdr(data) => generators::hdr::generate(common, data),
        ModalityInput::Pacemaker(data) => generators::pacemaker::generate(common, data),
        ModalityInput::PriorDose(data) => generators::prior_dose::generate(common, data),
    };

    match &result {
        Ok(writeup) => tracing::debug!(modality, chars = writeup.text.len(), "write-up generated"),
        Err(e) => tracing::warn!(modality, error = %e, "write-up rejected"),
    }
    result
}

/// Generate from a wire request carrying `common_info` and exactly one
/// modality payload.
pub fn generate_request(request: WriteupRequest) -> Result<GeneratedWriteup, WriteupError> {
    let (common, input) = request.into_parts()?;
    generate(&common, &input)
}

/// Parse a JSON request and generate from it. Unknown fields are rejected.
pub fn generate_json(json: &str) -> Result<GeneratedWriteup, WriteupError> {
    let request: WriteupRequest = serde_json::from_str(json)?;
    generate_request(request)
}

/// Reference data for a modality id, with catalog misses mapped into
/// [`WriteupError`].
pub fn list_reference_data(modality_id: &str) -> Result<&'static ReferenceData, WriteupError> {
    Ok(medphys_catalog::list_reference_data(modality_id)?)
}
