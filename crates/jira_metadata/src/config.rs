//! Allow-lists deciding which fields the create and filter forms may show.

use std::collections::HashSet;

use crate::models::Field;

pub const DEFAULT_ALLOWED_FIELD_KEYS: &[&str] = &[
    "priority",
    "labels",
    "fixVersions",
    "versions",
    "components",
    "security",
];

pub const DEFAULT_ALLOWED_CUSTOM_SCHEMAS: &[&str] = &[
    "com.atlassian.jira.plugin.system.customfieldtypes:select",
    "com.atlassian.jira.plugin.system.customfieldtypes:multiselect",
    "com.atlassian.jira.plugin.system.customfieldtypes:radiobuttons",
    "com.atlassian.jira.plugin.system.customfieldtypes:multicheckboxes",
    "com.atlassian.jira.plugin.system.customfieldtypes:cascadingselect",
    "com.atlassian.jira.plugin.system.customfieldtypes:labels",
    "com.atlassian.jira.plugin.system.customfieldtypes:textfield",
    "com.atlassian.jira.plugin.system.customfieldtypes:textarea",
    "com.pyxis.greenhopper.jira:gh-epic-link",
];

/// Field keys that are always placed by the form itself and never listed.
pub const RESERVED_FIELD_KEYS: &[&str] = &["summary", "description", "issuetype", "project"];

/// Field keys and custom schema ids the forms may show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayFieldConfig {
    pub allowed_field_keys: HashSet<String>,
    pub allowed_custom_schemas: HashSet<String>,
}

impl Default for DisplayFieldConfig {
    fn default() -> Self {
        Self {
            allowed_field_keys: DEFAULT_ALLOWED_FIELD_KEYS.iter().map(|key| key.to_string()).collect(),
            allowed_custom_schemas: DEFAULT_ALLOWED_CUSTOM_SCHEMAS
                .iter()
                .map(|schema| schema.to_string())
                .collect(),
        }
    }
}

impl DisplayFieldConfig {
    /// A config that permits nothing beyond summary and description.
    pub fn empty() -> Self {
        Self {
            allowed_field_keys: HashSet::new(),
            allowed_custom_schemas: HashSet::new(),
        }
    }

    /// Permits a non-custom field key.
    pub fn with_field_key(mut self, key: impl Into<String>) -> Self {
        self.allowed_field_keys.insert(key.into());
        self
    }

    /// Permits a custom field schema id.
    pub fn with_custom_schema(mut self, schema: impl Into<String>) -> Self {
        self.allowed_custom_schemas.insert(schema.into());
        self
    }

    /// Withdraws a non-custom field key.
    pub fn without_field_key(mut self, key: &str) -> Self {
        self.allowed_field_keys.remove(key);
        self
    }

    /// Withdraws a custom field schema id.
    pub fn without_custom_schema(mut self, schema: &str) -> Self {
        self.allowed_custom_schemas.remove(schema);
        self
    }

    /// Custom fields are judged by schema, everything else by key.
    pub fn permits(&self, key: &str, field: &Field) -> bool {
        match field.schema.custom.as_deref() {
            Some(custom) => self.allowed_custom_schemas.contains(custom),
            None => self.allowed_field_keys.contains(key),
        }
    }
}

/// Whether the key is one the form places itself.
pub fn is_reserved_field(key: &str) -> bool {
    RESERVED_FIELD_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::{is_reserved_field, DisplayFieldConfig};
    use crate::models::Field;
    use serde_json::json;

    fn field(value: serde_json::Value) -> Field {
        serde_json::from_value(value).expect("field should decode")
    }

    #[test]
    fn custom_fields_are_checked_against_schema_list() {
        let config = DisplayFieldConfig::default();
        let allowed = field(json!({"name": "Team", "schema": {"type": "option", "custom": "com.atlassian.jira.plugin.system.customfieldtypes:select"}}));
        let denied = field(json!({"name": "Rank", "schema": {"type": "any", "custom": "com.pyxis.greenhopper.jira:gh-lexo-rank"}}));

        assert!(config.permits("customfield_10010", &allowed));
        assert!(!config.permits("customfield_10011", &denied));
    }

    #[test]
    fn system_fields_are_checked_against_key_list() {
        let priority = field(json!({"name": "Priority", "schema": {"type": "priority"}}));
        let config = DisplayFieldConfig::default();
        assert!(config.permits("priority", &priority));
        assert!(!config.permits("assignee", &priority));

        let narrowed = config.without_field_key("priority").with_field_key("assignee");
        assert!(!narrowed.permits("priority", &priority));
        assert!(narrowed.permits("assignee", &priority));
    }

    #[test]
    fn empty_config_permits_nothing() {
        let priority = field(json!({"name": "Priority", "schema": {"type": "priority"}}));
        assert!(!DisplayFieldConfig::empty().permits("priority", &priority));
    }

    #[test]
    fn reserved_keys() {
        assert!(is_reserved_field("issuetype"));
        assert!(!is_reserved_field("priority"));
    }
}
