//! medphys-core
//!
//! Pure domain types shared by the medphys crates: wire inputs for every
//! treatment modality, the closed enumerations they draw from, numeric
//! field ranges, and the formatting rules used in generated text.

pub mod error;
pub mod format;
pub mod models;
pub mod range;
