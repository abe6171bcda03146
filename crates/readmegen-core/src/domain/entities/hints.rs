//! Smart defaults derived from the directory a README is generated in.

use serde::Serialize;

use crate::domain::value_objects::{License, ProjectType, RepoRef, TemplateKind};

/// What a [`crate::application::ports::ProjectInspector`] learned about a
/// project. Every field is optional; callers fall back to plain defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectHints {
    pub project_type: ProjectType,
    pub description: Option<String>,
    pub license: Option<License>,
    pub features: Vec<String>,
    pub repository: Option<RepoRef>,
}

impl ProjectHints {
    /// Template suggested by how much is already known.
    ///
    /// `standard` unless an existing README already lists five or more
    /// features, which suggests `fancy`.
    pub fn suggested_template(&self) -> TemplateKind {
        if self.features.len() >= 5 {
            TemplateKind::Fancy
        } else {
            TemplateKind::Standard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_scales_with_known_content() {
        let mut hints = ProjectHints::default();
        assert_eq!(hints.suggested_template(), TemplateKind::Standard);

        hints.description = Some("Something".into());
        hints.features = vec!["One".into(), "Two".into()];
        assert_eq!(hints.suggested_template(), TemplateKind::Standard);

        hints.features = (0..5).map(|i| format!("f{i}")).collect();
        assert_eq!(hints.suggested_template(), TemplateKind::Fancy);
    }
}
