mod field;
mod metadata;
mod option;
mod project_metadata;
mod value;

pub use field::{is_text_field, AllowedValue, Field, FieldKind, FieldSchema};
pub use metadata::{IssueMetadata, IssueType, Project};
pub use option::SelectOption;
pub use project_metadata::ProjectMetadata;
