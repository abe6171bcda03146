pub mod hints;
pub mod metadata;
pub mod template;

pub use hints::ProjectHints;
pub use metadata::{DEFAULT_DESCRIPTION, DEFAULT_OUTPUT, ProjectMetadata, ProjectMetadataBuilder};
pub use template::{RenderContext, TemplateDefinition};
