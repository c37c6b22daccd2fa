//! Create-meta document: projects, their issue types and per-type fields.

use serde::de::Deserializer;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

use super::value::{deserialize_optional_string, deserialize_string};
use super::Field;
use crate::error::Result;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct IssueMetadata {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl IssueMetadata {
    /// Decodes a create-meta JSON payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Decodes a create-meta JSON payload from raw bytes.
    pub fn from_slice(payload: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(payload)?)
    }

    /// Decodes a create-meta JSON payload from a reader. Read failures are
    /// reported as [`MetadataError::Io`](crate::error::MetadataError::Io).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Project with the given key, if present.
    pub fn project(&self, key: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.key == key)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Project {
    pub key: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default)]
    pub issuetypes: Vec<IssueType>,
}

impl Project {
    /// Display name, falling back to the project key.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.key)
    }

    /// Issue type with the given id, subtasks included.
    pub fn issue_type(&self, id: &str) -> Option<&IssueType> {
        self.issuetypes.iter().find(|issue_type| issue_type.id == id)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IssueType {
    #[serde(deserialize_with = "deserialize_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subtask: bool,
    #[serde(default, deserialize_with = "deserialize_fields")]
    pub fields: HashMap<String, Field>,
}

fn deserialize_fields<'de, D>(deserializer: D) -> std::result::Result<HashMap<String, Field>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut fields = Option::<HashMap<String, Field>>::deserialize(deserializer)?.unwrap_or_default();
    for (key, field) in fields.iter_mut() {
        if field.key.is_empty() {
            field.key = key.clone();
        }
    }
    Ok(fields)
}
