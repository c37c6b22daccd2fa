//! Flattened project/issue lists used by the attach-to-issue picker.

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

use super::SelectOption;
use crate::error::Result;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ProjectMetadata {
    #[serde(default)]
    pub projects: Vec<SelectOption>,
    #[serde(default)]
    pub issues_per_project: HashMap<String, Vec<SelectOption>>,
}

impl ProjectMetadata {
    /// Decodes a project/issue JSON payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Decodes a project/issue JSON payload from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectMetadata;

    #[test]
    fn numeric_issue_values_decode_as_text() {
        let metadata = ProjectMetadata::from_json(
            r#"{"projects": [{"value": "HEY", "label": "Hey"}],
                "issues_per_project": {"HEY": [{"value": 10, "label": "HEY-1"}]}}"#,
        )
        .expect("payload should decode");

        assert_eq!(metadata.projects[0].value, "HEY");
        assert_eq!(metadata.issues_per_project["HEY"][0].value, "10");
    }

    #[test]
    fn reader_with_missing_lists_decodes_empty() {
        let metadata = ProjectMetadata::from_reader("{}".as_bytes()).expect("payload should decode");
        assert_eq!(metadata, ProjectMetadata::default());
    }
}
