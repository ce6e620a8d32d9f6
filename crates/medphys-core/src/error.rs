use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::range::FieldRange;

/// The rule an input field broke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Constraint {
    /// Numeric value outside its documented range.
    Range { range: FieldRange },
    /// Value not in the closed set of accepted labels.
    OneOf { allowed: Vec<String> },
    /// A companion field that must be present is missing.
    Required,
    /// A companion field that must be absent (or zero) was supplied.
    Absent,
    /// A list or text field that must not be empty.
    NonEmpty,
    /// Two or more fields disagree with each other.
    Consistency,
}

/// A rejected input field. Identifies the field by its path in the request
/// (e.g. `srs_data.lesions[0].volume_cc`) and the constraint it violated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub constraint: Constraint,
    pub message: String,
}

impl ValidationError {
    pub fn range(field: impl Into<String>, value: f64, range: FieldRange) -> Self {
        Self {
            field: field.into(),
            constraint: Constraint::Range { range },
            message: format!("value {value} is outside range {range}"),
        }
    }

    pub fn one_of(field: impl Into<String>, value: &str, allowed: &[&str]) -> Self {
        Self {
            field: field.into(),
            constraint: Constraint::OneOf {
                allowed: allowed.iter().map(|s| s.to_string()).collect(),
            },
            message: format!("'{value}' is not one of: {}", allowed.join(", ")),
        }
    }

    pub fn required(field: impl Into<String>, reason: &str) -> Self {
        Self {
            field: field.into(),
            constraint: Constraint::Required,
            message: format!("required when {reason}"),
        }
    }

    pub fn absent(field: impl Into<String>, reason: &str) -> Self {
        Self {
            field: field.into(),
            constraint: Constraint::Absent,
            message: format!("must be absent when {reason}"),
        }
    }

    pub fn non_empty(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: Constraint::NonEmpty,
            message: "must not be empty".to_string(),
        }
    }

    pub fn consistency(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: Constraint::Consistency,
            message: message.into(),
        }
    }
}
