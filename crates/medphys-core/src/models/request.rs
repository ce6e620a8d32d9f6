use serde::{Deserialize, Serialize};

use super::common::CommonInfo;
use super::dibh::DibhInput;
use super::hdr::HdrInput;
use super::pacemaker::PacemakerInput;
use super::prior_dose::PriorDoseInput;
use super::sbrt::SbrtInput;
use super::srs::SrsInput;
use super::tbi::TbiInput;
use crate::error::ValidationError;

/// A wire request: `common_info` plus exactly one modality-keyed payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WriteupRequest {
    pub common_info: Option<CommonInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dibh_data: Option<DibhInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srs_data: Option<SrsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tbi_data: Option<TbiInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbrt_data: Option<SbrtInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdr_data: Option<HdrInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pacemaker_data: Option<PacemakerInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_dose_data: Option<PriorDoseInput>,
}

/// The modality-specific half of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalityInput {
    Dibh(DibhInput),
    Srs(SrsInput),
    Tbi(TbiInput),
    Sbrt(SbrtInput),
    Hdr(HdrInput),
    Pacemaker(PacemakerInput),
    PriorDose(PriorDoseInput),
}

impl ModalityInput {
    /// Registry id of the modality (matches the catalog).
    pub fn modality_id(&self) -> &'static str {
        match self {
            ModalityInput::Dibh(_) => "dibh",
            ModalityInput::Srs(_) => "srs",
            ModalityInput::Tbi(_) => "tbi",
            ModalityInput::Sbrt(_) => "sbrt",
            ModalityInput::Hdr(_) => "hdr",
            ModalityInput::Pacemaker(_) => "pacemaker",
            ModalityInput::PriorDose(_) => "prior_dose",
        }
    }

    /// Key the payload travels under in a [`WriteupRequest`].
    pub fn payload_key(&self) -> &'static str {
        match self {
            ModalityInput::Dibh(_) => "dibh_data",
            ModalityInput::Srs(_) => "srs_data",
            ModalityInput::Tbi(_) => "tbi_data",
            ModalityInput::Sbrt(_) => "sbrt_data",
            ModalityInput::Hdr(_) => "hdr_data",
            ModalityInput::Pacemaker(_) => "pacemaker_data",
            ModalityInput::PriorDose(_) => "prior_dose_data",
        }
    }
}

impl WriteupRequest {
    pub fn new(common_info: CommonInfo, input: ModalityInput) -> Self {
        let mut request = WriteupRequest {
            common_info: Some(common_info),
            ..Default::default()
        };
        match input {
            ModalityInput::Dibh(data) => request.dibh_data = Some(data),
            ModalityInput::Srs(data) => request.srs_data = Some(data),
            ModalityInput::Tbi(data) => request.tbi_data = Some(data),
            ModalityInput::Sbrt(data) => request.sbrt_data = Some(data),
            ModalityInput::Hdr(data) => request.hdr_data = Some(data),
            ModalityInput::Pacemaker(data) => request.pacemaker_data = Some(data),
            ModalityInput::PriorDose(data) => request.prior_dose_data = Some(data),
        }
        request
    }

    /// Split into common info and the single modality payload.
    pub fn into_parts(self) -> Result<(CommonInfo, ModalityInput), ValidationError> {
        let common_info = self
            .common_info
            .ok_or_else(|| ValidationError::required("common_info", "generating a write-up"))?;

        let mut payloads: Vec<ModalityInput> = [
            self.dibh_data.map(ModalityInput::Dibh),
            self.srs_data.map(ModalityInput::Srs),
            self.tbi_data.map(ModalityInput::Tbi),
            self.sbrt_data.map(ModalityInput::Sbrt),
            self.hdr_data.map(ModalityInput::Hdr),
            self.pacemaker_data.map(ModalityInput::Pacemaker),
            self.prior_dose_data.map(ModalityInput::PriorDose),
        ]
        .into_iter()
        .flatten()
        .collect();

        match payloads.len() {
            1 => Ok((common_info, payloads.remove(0))),
            0 => Err(ValidationError::consistency(
                "modality",
                "request carries no modality payload",
            )),
            _ => {
                let keys: Vec<_> = payloads.iter().map(|p| p.payload_key()).collect();
                Err(ValidationError::consistency(
                    "modality",
                    format!("request carries several modality payloads: {}", keys.join(", ")),
                ))
            }
        }
    }
}
