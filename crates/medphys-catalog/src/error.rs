use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown modality: {0}")]
    UnknownModality(String),
}
