use thiserror::Error;

use medphys_catalog::error::CatalogError;
use medphys_core::error::ValidationError;

/// Every variant is the caller's fault and carries enough detail to fix
/// the input. Gaps in the threshold tables are defects and panic instead.
#[derive(Debug, Error)]
pub enum WriteupError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("no documented device risk for treatment site '{site}' at {distance_cm} cm")]
    RiskLookup { site: String, distance_cm: f64 },

    #[error("malformed request: {0}")]
    Serialization(#[from] serde_json::Error),
}
