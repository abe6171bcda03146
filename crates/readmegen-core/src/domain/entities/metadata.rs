//! The metadata record a README is rendered from.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    markdown::normalize_feature,
    validation::DomainValidator,
    value_objects::{License, ProjectType, RepoRef, TemplateKind},
};

/// Description used when the user does not supply one.
pub const DEFAULT_DESCRIPTION: &str = "A brief description of your project";

/// Output file used when the user does not supply one.
pub const DEFAULT_OUTPUT: &str = "README.md";

/// Everything needed to render a README.
///
/// Created once per invocation through [`ProjectMetadata::builder`], whose
/// `build()` guarantees the record is valid. Enhancers produce a new record
/// via [`crate::domain::Enhancement::apply`] rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub description: String,
    pub template: TemplateKind,
    /// `None` means the user did not choose; rendered as the default license.
    pub license: Option<License>,
    pub features: Vec<String>,
    pub usage_example: String,
    pub project_type: ProjectType,
    pub repository: Option<RepoRef>,
    pub repository_url: Option<String>,
    pub contributors: Vec<String>,
    pub ai_enabled: bool,
    pub github_enabled: bool,
    pub output_path: PathBuf,
}

impl ProjectMetadata {
    pub fn builder() -> ProjectMetadataBuilder {
        ProjectMetadataBuilder::default()
    }

    /// License to render: the chosen one, or the default.
    pub fn effective_license(&self) -> License {
        self.license.unwrap_or_default()
    }

    /// Whether the description is still the placeholder default.
    pub fn has_default_description(&self) -> bool {
        self.description == DEFAULT_DESCRIPTION
    }
}

/// Builder for [`ProjectMetadata`]. Unset optional fields take their defaults.
#[derive(Debug, Default, Clone)]
pub struct ProjectMetadataBuilder {
    name: Option<String>,
    description: Option<String>,
    template: Option<TemplateKind>,
    license: Option<License>,
    features: Vec<String>,
    usage_example: Option<String>,
    project_type: ProjectType,
    repository: Option<RepoRef>,
    ai_enabled: bool,
    github_enabled: bool,
    output_path: Option<PathBuf>,
}

impl ProjectMetadataBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn template(mut self, template: TemplateKind) -> Self {
        self.template = Some(template);
        self
    }

    pub fn license(mut self, license: Option<License>) -> Self {
        self.license = license;
        self
    }

    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    pub fn usage_example(mut self, usage: impl Into<String>) -> Self {
        self.usage_example = Some(usage.into());
        self
    }

    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = project_type;
        self
    }

    pub fn repository(mut self, repository: Option<RepoRef>) -> Self {
        self.repository = repository;
        self
    }

    pub fn ai_enabled(mut self, enabled: bool) -> Self {
        self.ai_enabled = enabled;
        self
    }

    pub fn github_enabled(mut self, enabled: bool) -> Self {
        self.github_enabled = enabled;
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Apply defaults and validate.
    ///
    /// Features are normalised with [`normalize_feature`] and blank ones
    /// dropped.
    pub fn build(self) -> Result<ProjectMetadata, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;

        let metadata = ProjectMetadata {
            name,
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            template: self.template.unwrap_or_default(),
            license: self.license,
            features: self
                .features
                .into_iter()
                .map(|f| normalize_feature(&f))
                .filter(|f| !f.is_empty())
                .collect(),
            usage_example: self.usage_example.unwrap_or_default(),
            project_type: self.project_type,
            repository_url: self.repository.as_ref().map(RepoRef::web_url),
            repository: self.repository,
            contributors: Vec::new(),
            ai_enabled: self.ai_enabled,
            github_enabled: self.github_enabled,
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        };

        DomainValidator::validate_metadata(&metadata)?;
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::markdown::{parse_feature_list, render_feature_list};

    #[test]
    fn defaults_are_applied() {
        let m = ProjectMetadata::builder().name("Demo").build().unwrap();

        assert_eq!(m.description, DEFAULT_DESCRIPTION);
        assert!(m.has_default_description());
        assert_eq!(m.template, TemplateKind::Standard);
        assert_eq!(m.license, None);
        assert_eq!(m.effective_license(), License::Mit);
        assert_eq!(m.output_path, PathBuf::from("README.md"));
        assert!(m.features.is_empty());
        assert!(!m.ai_enabled && !m.github_enabled);
    }

    #[test]
    fn name_is_required() {
        assert_eq!(
            ProjectMetadata::builder().build().unwrap_err(),
            DomainError::MissingRequiredField { field: "name" }
        );
    }

    #[test]
    fn features_round_trip_through_markdown() {
        let m = ProjectMetadata::builder()
            .name("Demo")
            .features(["  a  b ", "", "line one\nline two", "plain"])
            .build()
            .unwrap();

        assert_eq!(m.features, vec!["a b", "line one line two", "plain"]);
        let doc = format!("## Features\n\n{}\n", render_feature_list(&m.features));
        assert_eq!(parse_feature_list(&doc), m.features);
    }

    #[test]
    fn repository_url_follows_repository() {
        let m = ProjectMetadata::builder()
            .name("Demo")
            .repository(Some("acme/widget".parse().unwrap()))
            .build()
            .unwrap();
        assert_eq!(m.repository_url.as_deref(), Some("https://github.com/acme/widget"));
    }

    #[test]
    fn invalid_name_fails_at_build() {
        let err = ProjectMetadata::builder().name("bad@name").build().unwrap_err();
        assert!(matches!(err, DomainError::InvalidProjectName { .. }));
    }

    #[test]
    fn blank_description_fails_at_build() {
        let err = ProjectMetadata::builder()
            .name("Demo")
            .description("   ")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidDescription { .. }));
    }

    #[test]
    fn blank_features_are_dropped_and_order_kept() {
        let m = ProjectMetadata::builder()
            .name("Demo")
            .features(["  fast ", "", "safe", "   "])
            .feature("small")
            .build()
            .unwrap();
        assert_eq!(m.features, vec!["fast", "safe", "small"]);
    }
}
