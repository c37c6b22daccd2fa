//! Option lists derived from issue metadata for the plugin's select widgets.
//!
//! Every function here is total: absent documents, unknown project keys and
//! unknown issue type ids produce empty results instead of errors, so the
//! rendering layer never has to branch on partially loaded metadata.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

use crate::config::{is_reserved_field, DisplayFieldConfig};
use crate::models::{is_text_field, Field, IssueMetadata, IssueType, ProjectMetadata, SelectOption};

static EMPTY_FIELDS: Lazy<HashMap<String, Field>> = Lazy::new(HashMap::new);

const SUMMARY_KEY: &str = "summary";
const DESCRIPTION_KEY: &str = "description";

/// Project options in document order, labelled by name.
pub fn project_options(metadata: Option<&IssueMetadata>) -> Vec<SelectOption> {
    let Some(metadata) = metadata else {
        return Vec::new();
    };
    metadata
        .projects
        .iter()
        .map(|project| SelectOption::new(project.key.clone(), project.label()))
        .collect()
}

/// Project options of the flattened picker document, returned as stored.
pub fn project_metadata_options(metadata: Option<&ProjectMetadata>) -> Vec<SelectOption> {
    metadata.map(|metadata| metadata.projects.clone()).unwrap_or_default()
}

/// Non-subtask issue types of a project, in document order.
pub fn issue_types_for_project<'a>(
    metadata: Option<&'a IssueMetadata>,
    project_key: Option<&str>,
) -> Vec<&'a IssueType> {
    let (Some(metadata), Some(project_key)) = (metadata, project_key) else {
        return Vec::new();
    };
    match metadata.project(project_key) {
        Some(project) => project
            .issuetypes
            .iter()
            .filter(|issue_type| !issue_type.subtask)
            .collect(),
        None => {
            debug!(project_key, "project missing from issue metadata");
            Vec::new()
        }
    }
}

/// `{id, name}` options of a project's non-subtask issue types.
pub fn issue_type_options(metadata: Option<&IssueMetadata>, project_key: Option<&str>) -> Vec<SelectOption> {
    issue_types_for_project(metadata, project_key)
        .into_iter()
        .map(|issue_type| SelectOption::new(issue_type.id.clone(), issue_type.name.clone()))
        .collect()
}

/// Issue options stored for one project, returned as stored.
pub fn issue_options_for_project(
    metadata: Option<&ProjectMetadata>,
    project_key: Option<&str>,
) -> Vec<SelectOption> {
    let (Some(metadata), Some(project_key)) = (metadata, project_key) else {
        return Vec::new();
    };
    metadata
        .issues_per_project
        .get(project_key)
        .cloned()
        .unwrap_or_default()
}

/// Union of the issue options of several projects: sorted by value and
/// de-duplicated, keeping the first entry of each run of equal values.
pub fn issue_options_for_projects<S>(metadata: Option<&ProjectMetadata>, project_keys: &[S]) -> Vec<SelectOption>
where
    S: AsRef<str>,
{
    let mut merged: Vec<SelectOption> = project_keys
        .iter()
        .flat_map(|key| issue_options_for_project(metadata, Some(key.as_ref())))
        .filter(|option| !option.value.is_empty())
        .collect();
    let before = merged.len();

    merged.sort_by(|a, b| compare_option_values(&a.value, &b.value));
    merged.dedup_by(|later, kept| later.value == kept.value);

    trace!(projects = project_keys.len(), before, after = merged.len(), "merged issue options");
    merged
}

/// Numeric values order numerically and ahead of non-numeric ones; the rest
/// order lexically. Numerically equal spellings ("10", "10.0") tie-break
/// lexically so equal strings always end up adjacent.
fn compare_option_values(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn numeric_value(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Field map of one issue type. Callers get a shared empty map when any
/// part of the lookup is missing.
pub fn fields_for_issue_type<'a>(
    metadata: Option<&'a IssueMetadata>,
    project_key: Option<&str>,
    issue_type_id: Option<&str>,
) -> &'a HashMap<String, Field> {
    let (Some(metadata), Some(project_key), Some(issue_type_id)) = (metadata, project_key, issue_type_id) else {
        return &EMPTY_FIELDS;
    };
    match metadata
        .project(project_key)
        .and_then(|project| project.issue_type(issue_type_id))
    {
        Some(issue_type) => &issue_type.fields,
        None => {
            debug!(project_key, issue_type_id, "issue type missing from issue metadata");
            &EMPTY_FIELDS
        }
    }
}

/// `{key, name}` option per field of an issue type.
pub fn field_options(
    metadata: Option<&IssueMetadata>,
    project_key: Option<&str>,
    issue_type_id: Option<&str>,
) -> Vec<SelectOption> {
    fields_for_issue_type(metadata, project_key, issue_type_id)
        .iter()
        .map(|(key, field)| SelectOption::new(key.clone(), field.name.clone()))
        .collect()
}

/// Fields of an issue type in form order: summary, description, then the
/// permitted remainder sorted by name with pickers ahead of text inputs.
pub fn sorted_display_fields<'a>(fields: &'a HashMap<String, Field>, config: &DisplayFieldConfig) -> Vec<&'a Field> {
    let mut ordered: Vec<&Field> = Vec::with_capacity(fields.len());
    ordered.extend(fields.get(SUMMARY_KEY));
    ordered.extend(fields.get(DESCRIPTION_KEY));

    let mut remaining: Vec<&Field> = fields
        .iter()
        .filter(|(key, field)| !is_reserved_field(key) && config.permits(key, field))
        .map(|(_, field)| field)
        .collect();
    remaining.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.key.cmp(&b.key)));

    let (text, select): (Vec<&Field>, Vec<&Field>) = remaining.into_iter().partition(|field| is_text_field(field));
    ordered.extend(select);
    ordered.extend(text);
    ordered
}

/// `{id, label}` options of a picker field's allowed values, in document order.
pub fn allowed_value_options(field: &Field) -> Vec<SelectOption> {
    field.allowed_values().iter().map(|value| value.to_option()).collect()
}

/// A picker field offered by the subscription filter, merged across every
/// issue type of the chosen projects that carries it.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FilterField {
    pub key: String,
    pub name: String,
    pub values: Vec<SelectOption>,
    pub issue_types: Vec<SelectOption>,
}

impl FilterField {
    /// Whether the field exists on the given issue type.
    pub fn applies_to(&self, issue_type_id: &str) -> bool {
        self.issue_types.iter().any(|issue_type| issue_type.value == issue_type_id)
    }
}

/// Permitted picker fields of the projects' issue types, merged by key and
/// sorted by name.
pub fn filter_fields_for_projects<S>(
    metadata: Option<&IssueMetadata>,
    project_keys: &[S],
    config: &DisplayFieldConfig,
) -> Vec<FilterField>
where
    S: AsRef<str>,
{
    let mut merged: Vec<FilterField> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut seen_values: Vec<HashSet<String>> = Vec::new();

    for project_key in project_keys {
        for issue_type in issue_types_for_project(metadata, Some(project_key.as_ref())) {
            let mut candidates: Vec<(&String, &Field)> = issue_type
                .fields
                .iter()
                .filter(|(key, field)| !is_reserved_field(key) && !is_text_field(field) && config.permits(key, field))
                .collect();
            candidates.sort_by(|a, b| a.0.cmp(b.0));

            for (key, field) in candidates {
                let index = *positions.entry(key.clone()).or_insert_with(|| {
                    merged.push(FilterField {
                        key: key.clone(),
                        name: field.name.clone(),
                        values: Vec::new(),
                        issue_types: Vec::new(),
                    });
                    seen_values.push(HashSet::new());
                    merged.len() - 1
                });

                let entry = &mut merged[index];
                for option in allowed_value_options(field) {
                    if seen_values[index].insert(option.value.clone()) {
                        entry.values.push(option);
                    }
                }
                if !entry.applies_to(&issue_type.id) {
                    entry
                        .issue_types
                        .push(SelectOption::new(issue_type.id.clone(), issue_type.name.clone()));
                }
            }
        }
    }

    merged.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.key.cmp(&b.key)));
    merged
}

/// Filter fields missing from at least one of the chosen issue types.
pub fn conflicting_fields<'a, S>(fields: &'a [FilterField], issue_type_ids: &[S]) -> Vec<&'a FilterField>
where
    S: AsRef<str>,
{
    fields
        .iter()
        .filter(|field| issue_type_ids.iter().any(|id| !field.applies_to(id.as_ref())))
        .collect()
}
