//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `readmegen-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::application::error::EnhancerError;
use crate::domain::{
    Enhancement, ProjectHints, ProjectMetadata, RenderContext, TemplateDefinition, TemplateKind,
};
use crate::error::ReadmeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `readmegen_adapters::filesystem::LocalFilesystem` (production)
/// - `readmegen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ReadmeResult<()>;

    /// Replace the file at `path` with `content` in one step.
    ///
    /// Readers never observe a partially written file: either the old
    /// content or the new content is visible.
    fn write_file(&self, path: &Path, content: &str) -> ReadmeResult<()>;
}

/// Port for template lookup.
///
/// Implemented by `readmegen_adapters::BuiltinTemplateStore`.
#[cfg_attr(test, automock)]
pub trait TemplateStore: Send + Sync {
    /// All templates, in display order.
    fn list(&self) -> ReadmeResult<Vec<TemplateDefinition>>;

    fn get(&self, id: TemplateKind) -> ReadmeResult<TemplateDefinition>;
}

/// Port for template rendering.
///
/// Implemented by `readmegen_adapters::renderer::SimpleRenderer`.
#[cfg_attr(test, automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template's content with the given variables.
    fn render(&self, template: &TemplateDefinition, context: &RenderContext)
    -> ReadmeResult<String>;
}

/// Port for an optional metadata source.
///
/// Errors are never fatal; the caller logs them and keeps the metadata it
/// already had.
#[cfg_attr(test, automock)]
pub trait Enhancer: Send + Sync {
    /// Short name used in warnings and logs, e.g. `"ai"`.
    fn name(&self) -> &'static str;

    fn enhance(&self, metadata: &ProjectMetadata) -> Result<Enhancement, EnhancerError>;
}

/// Port for reading hints out of an existing project directory.
///
/// Best effort: unreadable or unrecognised files simply yield fewer hints.
pub trait ProjectInspector: Send + Sync {
    fn inspect(&self, root: &Path) -> ProjectHints;
}
