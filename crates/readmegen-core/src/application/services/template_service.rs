//! Template Service - registry queries.
//!
//! Lookup and listing of the built-in templates, separated from
//! ReadmeService for single responsibility.

use std::str::FromStr;

use crate::{
    application::ports::TemplateStore,
    domain::{TemplateDefinition, TemplateKind},
    error::ReadmeResult,
};

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// List all templates: minimal, standard, fancy.
    pub fn list(&self) -> ReadmeResult<Vec<TemplateDefinition>> {
        self.store.list()
    }

    /// Get a template by id. Case-insensitive, surrounding whitespace ignored.
    pub fn get(&self, id: &str) -> ReadmeResult<TemplateDefinition> {
        let kind = TemplateKind::from_str(id)?;
        self.store.get(kind)
    }

    /// First `lines` non-empty lines of a template's content.
    pub fn preview(&self, id: &str, lines: usize) -> ReadmeResult<Vec<&'static str>> {
        Ok(self.get(id)?.preview(lines))
    }
}
