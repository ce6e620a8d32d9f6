use serde::{Deserialize, Serialize};
use ts_rs::TS;

use medphys_core::models::choice::ChoiceValue;
use medphys_core::range::FieldRange;

/// One selectable value for an enumerated input field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Choice {
    pub value: String,
    pub description: Option<String>,
}

/// The closed set of values accepted by an enumerated input field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceSet {
    /// Field path within the modality payload (e.g. "lesions.site").
    pub field: String,
    pub name: String,
    pub choices: Vec<Choice>,
}

/// Allowed values of one field given the value of another,
/// e.g. applicators available for an HDR treatment site.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceDependency {
    pub field: String,
    pub depends_on: String,
    pub when: String,
    pub allowed: Vec<String>,
    pub default: String,
}

/// Limits for a numeric input field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericField {
    pub field: String,
    pub name: String,
    pub unit: Option<String>,
    pub range: FieldRange,
}

/// A commonly used dose/fractionation scheme.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FractionationPreset {
    pub site: String,
    pub dose_gy: f64,
    pub fractions: u32,
    pub description: Option<String>,
}

/// A published lookup table, flattened to text for display.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Everything a caller needs to build the input form for one modality.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceData {
    pub choice_sets: Vec<ChoiceSet>,
    pub dependencies: Vec<ChoiceDependency>,
    pub numeric_fields: Vec<NumericField>,
    pub presets: Vec<FractionationPreset>,
    pub tables: Vec<ReferenceTable>,
}

impl ReferenceData {
    pub fn choice_set(&self, field: &str) -> Option<&ChoiceSet> {
        self.choice_sets.iter().find(|c| c.field == field)
    }

    pub fn numeric_field(&self, field: &str) -> Option<&NumericField> {
        self.numeric_fields.iter().find(|n| n.field == field)
    }
}

/// Build the choice set for a field from its enumeration.
pub fn choice_set<T: ChoiceValue>(field: &str, name: &str) -> ChoiceSet {
    ChoiceSet {
        field: field.to_string(),
        name: name.to_string(),
        choices: T::ALL
            .iter()
            .map(|c| Choice {
                value: c.label().to_string(),
                description: c.description().map(str::to_string),
            })
            .collect(),
    }
}

pub fn numeric(field: &str, name: &str, unit: Option<&str>, range: FieldRange) -> NumericField {
    NumericField {
        field: field.to_string(),
        name: name.to_string(),
        unit: unit.map(str::to_string),
        range,
    }
}

pub fn preset(site: &str, dose_gy: f64, fractions: u32, description: &str) -> FractionationPreset {
    FractionationPreset {
        site: site.to_string(),
        dose_gy,
        fractions,
        description: Some(description.to_string()),
    }
}
