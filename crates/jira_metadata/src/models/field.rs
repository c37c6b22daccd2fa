//! Issue field metadata as returned by the Jira create-meta endpoint.

use serde::Deserialize;

use super::value::{deserialize_optional_string, deserialize_string};
use super::SelectOption;

/// Schema descriptor attached to every field.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default)]
    pub custom: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub items: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
}

/// A selectable value of a picker field. Jira labels these with either
/// `name` or `value` depending on the field type.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AllowedValue {
    #[serde(deserialize_with = "deserialize_string")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl AllowedValue {
    /// Display label: `name`, then `value`, then the id.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.value.as_deref())
            .unwrap_or(&self.id)
    }

    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.id.clone(), self.label())
    }
}

/// How a field is presented, decided once when the field is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Picker field. `allowed_values` is empty when the values come from a
    /// lookup (users, issues) rather than the metadata itself.
    Select { allowed_values: Vec<AllowedValue> },
    /// Free text input.
    Text,
    /// Array of free strings, e.g. labels.
    StringArray,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field key. Filled from the enclosing map key when the payload omits it.
    pub key: String,
    pub name: String,
    pub required: bool,
    pub schema: FieldSchema,
    pub kind: FieldKind,
}

impl Field {
    pub fn is_custom(&self) -> bool {
        self.schema.custom.is_some()
    }

    /// Allowed values of a picker; empty for text inputs.
    pub fn allowed_values(&self) -> &[AllowedValue] {
        match &self.kind {
            FieldKind::Select { allowed_values } => allowed_values,
            FieldKind::Text | FieldKind::StringArray => &[],
        }
    }
}

/// Whether the field is rendered as a free text input rather than a picker.
pub fn is_text_field(field: &Field) -> bool {
    matches!(field.kind, FieldKind::Text)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    key: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    schema: FieldSchema,
    #[serde(default)]
    allowed_values: Option<Vec<AllowedValue>>,
}

fn classify(schema: &FieldSchema, allowed_values: Option<Vec<AllowedValue>>) -> FieldKind {
    if let Some(allowed_values) = allowed_values {
        return FieldKind::Select { allowed_values };
    }
    match (schema.field_type.as_str(), schema.items.as_deref()) {
        ("array", Some("string")) => FieldKind::StringArray,
        ("string", _) => FieldKind::Text,
        _ => FieldKind::Select {
            allowed_values: Vec::new(),
        },
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawField::deserialize(deserializer)?;
        let kind = classify(&raw.schema, raw.allowed_values);
        Ok(Field {
            key: raw.key.unwrap_or_default(),
            name: raw.name,
            required: raw.required,
            schema: raw.schema,
            kind,
        })
    }
}
