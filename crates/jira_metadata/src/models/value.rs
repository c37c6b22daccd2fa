//! Lenient scalar decoding shared by the metadata models.
//!
//! Jira reports ids as strings on most endpoints and as numbers on a few, so
//! identifiers are normalized to `String` at the boundary.

use serde::de::Deserializer;
use serde::Deserialize;
use serde_json::Value;

pub(crate) fn deserialize_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_string(deserializer).map(Option::unwrap_or_default)
}

pub(crate) fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_string))
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
