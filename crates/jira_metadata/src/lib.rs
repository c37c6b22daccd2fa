//! Typed Jira issue metadata and the option projections used by plugin forms.

pub mod config;
pub mod error;
pub mod models;
pub mod projector;
pub mod validator;

pub use config::DisplayFieldConfig;
pub use error::{MetadataError, Result};
pub use models::{
    is_text_field, AllowedValue, Field, FieldKind, FieldSchema, IssueMetadata, IssueType, Project,
    ProjectMetadata, SelectOption,
};
pub use projector::FilterField;
pub use validator::ValidatorRegistry;
