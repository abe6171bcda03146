// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for readmegen.
//!
//! This module contains pure logic with no I/O. Filesystem access, HTTP and
//! template storage are handled via ports (traits) defined in the application
//! layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or clock access
//! - **Deterministic**: equal inputs render to equal bytes
pub mod enhancement;
pub mod entities;
pub mod error;
pub mod markdown;
pub mod value_objects;

mod validation;

pub use enhancement::Enhancement;
pub use entities::{
    DEFAULT_DESCRIPTION, DEFAULT_OUTPUT, ProjectHints, ProjectMetadata, ProjectMetadataBuilder,
    RenderContext, TemplateDefinition,
};
pub use error::{DomainError, ErrorCategory};
pub use markdown::{normalize_feature, parse_feature_list, render_feature_list};
pub use validation::{DomainValidator, MAX_NAME_LEN};
pub use value_objects::{License, ProjectType, RepoRef, TemplateKind};
