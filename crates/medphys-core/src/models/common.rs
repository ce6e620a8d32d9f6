use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct Person {
    pub name: String,
}

/// Identifying fields supplied with every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct CommonInfo {
    pub physician: Person,
    pub physicist: Person,
}

impl CommonInfo {
    pub fn new(physician: impl Into<String>, physicist: impl Into<String>) -> Self {
        Self {
            physician: Person {
                name: physician.into(),
            },
            physicist: Person {
                name: physicist.into(),
            },
        }
    }
}

/// The generated narrative, returned verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneratedWriteup {
    pub text: String,
}
