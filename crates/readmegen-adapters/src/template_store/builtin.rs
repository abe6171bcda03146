//! Template store serving the compiled-in templates.

use readmegen_core::{
    application::ports::TemplateStore,
    domain::{TemplateDefinition, TemplateKind},
    error::ReadmeResult,
};
use tracing::trace;

use crate::builtin_templates;

/// Read-only store over [`builtin_templates`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn list(&self) -> ReadmeResult<Vec<TemplateDefinition>> {
        Ok(builtin_templates::all().to_vec())
    }

    fn get(&self, id: TemplateKind) -> ReadmeResult<TemplateDefinition> {
        trace!(template = %id, "Loading built-in template");
        Ok(builtin_templates::get(id))
    }
}
