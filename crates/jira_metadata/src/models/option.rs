use serde::{Deserialize, Serialize};

use super::value::deserialize_string;

/// A `{value, label}` pair as consumed by select widgets.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    #[serde(deserialize_with = "deserialize_string")]
    pub value: String,
    #[serde(default)]
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
