//! # Template Domain Model
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateDefinition (Entity, static)                        │
//! │  ├── id: TemplateKind          (minimal/standard/fancy)     │
//! │  ├── title, description, includes, best_for (display)       │
//! │  └── content: &'static str     (markdown with placeholders) │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{PROJECT_NAME}} -> "MyApp"     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Templates are compiled into the binary, so every field is `&'static str`.
//! Content uses `{{NAME}}` placeholders; the set of names a context provides
//! is listed in [`RenderContext::VARIABLES`].

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{
    entities::ProjectMetadata, error::DomainError, markdown, value_objects::TemplateKind,
};

/// A built-in README template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDefinition {
    pub id: TemplateKind,
    /// Display title, e.g. "🎯 Minimal".
    pub title: &'static str,
    pub description: &'static str,
    /// Section names the template renders, for the `templates` listing.
    pub includes: &'static [&'static str],
    pub best_for: &'static str,
    #[serde(skip)]
    pub content: &'static str,
}

impl TemplateDefinition {
    /// First `lines` non-empty lines of the content, placeholders intact.
    pub fn preview(&self, lines: usize) -> Vec<&'static str> {
        self.content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .take(lines)
            .collect()
    }

    /// Placeholder names referenced by the content, in order of first use.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.content;
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else { break };
            let name = after[..end].trim();
            if !names.contains(&name) {
                names.push(name);
            }
            rest = &after[end + 2..];
        }
        names
    }
}

/// Context for template rendering.
///
/// A **Value Object** holding every variable a template may reference.
/// Immutable after creation - transformations create new instances (see
/// `with_variable`).
///
/// ## Built-in Variables
///
/// | Variable         | Source                                        |
/// |------------------|-----------------------------------------------|
/// | `PROJECT_NAME`   | metadata name                                 |
/// | `DESCRIPTION`    | metadata description                          |
/// | `FEATURES`       | one `- item` line per feature                 |
/// | `LICENSE`        | license notice sentence                       |
/// | `LICENSE_BADGE`  | shields.io badge (empty when unlicensed)      |
/// | `USAGE`          | usage example, or a generic hint              |
/// | `INSTALLATION`   | derived from the detected project type        |
/// | `REPOSITORY_URL` | GitHub URL of the repository, or empty        |
/// | `CONTRIBUTORS`   | one `- @login` line per contributor           |
///
/// Nothing here reads the clock or the environment, so equal metadata always
/// renders to equal bytes.
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub const VARIABLES: [&'static str; 9] = [
        "PROJECT_NAME",
        "DESCRIPTION",
        "FEATURES",
        "LICENSE",
        "LICENSE_BADGE",
        "USAGE",
        "INSTALLATION",
        "REPOSITORY_URL",
        "CONTRIBUTORS",
    ];

    /// Create a context holding only `PROJECT_NAME`.
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut variables = HashMap::new();
        variables.insert("PROJECT_NAME".to_string(), name.clone());
        Self {
            project_name: name,
            variables,
        }
    }

    /// Derive every built-in variable from a metadata record.
    pub fn from_metadata(metadata: &ProjectMetadata) -> Self {
        let license = metadata.effective_license();

        let usage = if metadata.usage_example.trim().is_empty() {
            format!("Describe how to use {} here.", metadata.name)
        } else {
            format!("```bash\n{}\n```", metadata.usage_example.trim())
        };

        let contributors = if metadata.contributors.is_empty() {
            "Contributions are welcome! Feel free to open an issue or a pull request.".to_string()
        } else {
            metadata
                .contributors
                .iter()
                .map(|c| format!("- @{c}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        Self::new(metadata.name.clone())
            .with_variable("DESCRIPTION", metadata.description.trim())
            .with_variable("FEATURES", markdown::render_feature_list(&metadata.features))
            .with_variable("LICENSE", license.notice())
            .with_variable("LICENSE_BADGE", license.badge())
            .with_variable("USAGE", usage)
            .with_variable(
                "INSTALLATION",
                metadata.project_type.install_instructions(&metadata.name),
            )
            .with_variable(
                "REPOSITORY_URL",
                metadata.repository_url.clone().unwrap_or_default(),
            )
            .with_variable("CONTRIBUTORS", contributors)
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render `content` by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Single left-to-right pass: substituted values are copied verbatim and
    /// never scanned again, so user text containing `{{` is safe.
    ///
    /// # Errors
    ///
    /// - [`DomainError::UnresolvedPlaceholder`] when a placeholder has no
    ///   variable in this context.
    /// - [`DomainError::MalformedTemplate`] when `{{` is never closed.
    pub fn render(&self, template: &str, content: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(content.len() + 256);
        let mut rest = content;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after.find("}}").ok_or(DomainError::MalformedTemplate {
                template: template.to_string(),
                offset: offset + start,
            })?;

            let key = after[..end].trim();
            let value = self
                .get(key)
                .ok_or_else(|| DomainError::UnresolvedPlaceholder {
                    template: template.to_string(),
                    placeholder: key.to_string(),
                })?;
            out.push_str(value);

            let consumed = start + 2 + end + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }
        out.push_str(rest);

        Ok(out)
    }
}
