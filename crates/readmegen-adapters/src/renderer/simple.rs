//! Simple variable substitution renderer.

use readmegen_core::{
    application::ports::TemplateRenderer,
    domain::{RenderContext, TemplateDefinition},
    error::ReadmeResult,
};
use tracing::instrument;

/// Renderer using single-pass `{{VARIABLE}}` substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %template.id))]
    fn render(
        &self,
        template: &TemplateDefinition,
        context: &RenderContext,
    ) -> ReadmeResult<String> {
        Ok(context.render(template.id.as_str(), template.content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readmegen_core::{
        domain::{DomainError, TemplateKind},
        error::ReadmeError,
    };

    fn template(content: &'static str) -> TemplateDefinition {
        TemplateDefinition {
            id: TemplateKind::Minimal,
            title: "t",
            description: "d",
            includes: &[],
            best_for: "b",
            content,
        }
    }

    #[test]
    fn renders_known_variables() {
        let ctx = RenderContext::new("Demo").with_variable("DESCRIPTION", "Hello");

        let out = SimpleRenderer::new()
            .render(&template("# {{PROJECT_NAME}}\n{{DESCRIPTION}}\n"), &ctx)
            .unwrap();

        assert_eq!(out, "# Demo\nHello\n");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let ctx = RenderContext::new("Demo");

        let err = SimpleRenderer::new()
            .render(&template("{{NOPE}}"), &ctx)
            .unwrap_err();

        assert!(matches!(
            err,
            ReadmeError::Domain(DomainError::UnresolvedPlaceholder { ref placeholder, .. })
                if placeholder == "NOPE"
        ));
    }
}
