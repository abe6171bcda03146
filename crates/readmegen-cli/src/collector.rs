//! Metadata collection: turns flags or prompt answers into a validated
//! [`ProjectMetadata`].
//!
//! Precedence for every value is flag (or answer), then configuration, then
//! what the project probe found, then the built-in default.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::{debug, instrument};

use readmegen_core::domain::{
    DEFAULT_DESCRIPTION, DomainError, DomainValidator, License, ProjectHints, ProjectMetadata,
    RepoRef, TemplateDefinition, TemplateKind,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    prompt::Prompter,
};

/// Tries per question before `init` gives up.
pub const MAX_ATTEMPTS: usize = 3;

const FALLBACK_NAME: &str = "my-project";

/// Final component of `dir`, the default project name.
pub fn directory_name(dir: &Path) -> String {
    dir.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| FALLBACK_NAME.to_owned())
}

/// Metadata for `readmegen generate`. Never prompts.
///
/// An unknown `--template` is a not-found error; a bad `--license`,
/// `--repo`, name, or description is a validation error.
#[instrument(skip_all)]
pub fn from_flags(
    args: &GenerateArgs,
    config: &AppConfig,
    hints: &ProjectHints,
    cwd: &Path,
) -> CliResult<ProjectMetadata> {
    let template = match &args.template {
        Some(id) => TemplateKind::from_str(id)?,
        None => config.default_template(),
    };
    let license = match &args.license {
        Some(license) => Some(License::from_str(license)?),
        None => config.default_license().or(hints.license),
    };
    let repository = match &args.repo {
        Some(repo) => Some(RepoRef::from_str(repo)?),
        None => hints.repository.clone(),
    };

    let mut builder = ProjectMetadata::builder()
        .name(args.name.clone().unwrap_or_else(|| directory_name(cwd)))
        .template(template)
        .license(license)
        .features(args.features.iter().cloned())
        .project_type(hints.project_type)
        .repository(repository)
        .ai_enabled(args.ai)
        .github_enabled(args.github)
        .output_path(
            args.output
                .clone()
                .unwrap_or_else(|| config.defaults.output.clone()),
        );

    if let Some(description) = args.description.clone().or_else(|| hints.description.clone()) {
        builder = builder.description(description);
    }
    if let Some(usage) = &args.usage {
        builder = builder.usage_example(usage.as_str());
    }

    let metadata = builder.build()?;
    debug!(?metadata, "Collected metadata from flags");
    Ok(metadata)
}

/// The question sequence behind `readmegen init`.
pub struct Interview<'a> {
    prompter: &'a dyn Prompter,
    config: &'a AppConfig,
    hints: &'a ProjectHints,
}

impl<'a> Interview<'a> {
    pub fn new(prompter: &'a dyn Prompter, config: &'a AppConfig, hints: &'a ProjectHints) -> Self {
        Self {
            prompter,
            config,
            hints,
        }
    }

    /// Ask name, description, template, features, usage, license, AI and
    /// GitHub in that order.
    #[instrument(skip_all, fields(default_name = %default_name))]
    pub fn run(
        &self,
        default_name: &str,
        templates: &[TemplateDefinition],
        output_path: PathBuf,
    ) -> CliResult<ProjectMetadata> {
        let name = self.ask("Project name", Some(default_name), "project name", |s| {
            DomainValidator::validate_project_name(s).map(|()| s.to_owned())
        })?;

        let default_description = self.hints.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);
        let description = self.ask(
            "Description",
            Some(default_description),
            "description",
            |s| DomainValidator::validate_description(s).map(|()| s.to_owned()),
        )?;

        let template = self.ask_template(templates)?;
        let features = self.ask_features()?;
        let usage = self.prompter.input("Usage example (optional)", None)?;
        let license = self.ask_license()?;
        let ai_enabled = self
            .prompter
            .confirm("Improve the description with AI?", false)?;
        let github_enabled = self
            .prompter
            .confirm("Fetch details from GitHub?", self.hints.repository.is_some())?;

        let repository = match (&self.hints.repository, github_enabled) {
            (Some(repo), _) => Some(repo.clone()),
            (None, true) => self.ask(
                "GitHub repository (owner/name, blank to skip)",
                None,
                "repository",
                |s| match s {
                    "" => Ok(None),
                    s => RepoRef::from_str(s).map(Some),
                },
            )?,
            (None, false) => None,
        };

        let metadata = ProjectMetadata::builder()
            .name(name)
            .description(description)
            .template(template)
            .license(Some(license))
            .features(features)
            .usage_example(usage.trim())
            .project_type(self.hints.project_type)
            .repository(repository)
            .ai_enabled(ai_enabled)
            .github_enabled(github_enabled)
            .output_path(output_path)
            .build()?;

        debug!(?metadata, "Collected metadata from prompts");
        Ok(metadata)
    }

    /// Re-asks until `parse` accepts the trimmed answer, at most
    /// [`MAX_ATTEMPTS`] times.
    fn ask<T>(
        &self,
        prompt: &str,
        default: Option<&str>,
        field: &str,
        parse: impl Fn(&str) -> Result<T, DomainError>,
    ) -> CliResult<T> {
        let mut last_error = None;

        for attempt in 1..=MAX_ATTEMPTS {
            let answer = self.prompter.input(prompt, default)?;
            match parse(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(field, attempt, error = %e, "Answer rejected");
                    self.prompter.report(&e.to_string());
                    last_error = Some(e);
                }
            }
        }

        Err(CliError::InvalidInput {
            message: format!("no valid {field} after {MAX_ATTEMPTS} attempts"),
            source: last_error.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        })
    }

    fn ask_template(&self, templates: &[TemplateDefinition]) -> CliResult<TemplateKind> {
        let items: Vec<String> = templates
            .iter()
            .map(|t| format!("{} - {}", t.title, t.description))
            .collect();
        let suggested = self.hints.suggested_template();
        let default = templates
            .iter()
            .position(|t| t.id == suggested)
            .unwrap_or_default();

        let index = self.prompter.select("Template", &items, default)?;
        templates
            .get(index)
            .map(|t| t.id)
            .ok_or_else(|| DomainError::TemplateNotFound(index.to_string()).into())
    }

    fn ask_features(&self) -> CliResult<Vec<String>> {
        let mut features = Vec::new();

        let found = &self.hints.features;
        if !found.is_empty()
            && self.prompter.confirm(
                &format!("Keep the {} features from the existing README?", found.len()),
                true,
            )?
        {
            features.extend(found.iter().cloned());
        }

        loop {
            let feature = self
                .prompter
                .input("Feature (leave blank to finish)", None)?;
            let feature = feature.trim();
            if feature.is_empty() {
                break;
            }
            features.push(feature.to_owned());
        }
        Ok(features)
    }

    fn ask_license(&self) -> CliResult<License> {
        let items: Vec<String> = License::ALL
            .iter()
            .map(|l| l.display_name().to_owned())
            .collect();
        let preferred = self
            .config
            .default_license()
            .or(self.hints.license)
            .unwrap_or_default();
        let default = License::ALL
            .iter()
            .position(|l| *l == preferred)
            .unwrap_or_default();

        let index = self.prompter.select("License", &items, default)?;
        Ok(License::ALL.get(index).copied().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use readmegen_adapters::builtin_templates;
    use readmegen_core::{
        domain::ProjectType,
        error::{ErrorCategory, ReadmeError},
    };

    fn cwd() -> PathBuf {
        PathBuf::from("/work/my-tool")
    }

    fn generate_args() -> GenerateArgs {
        GenerateArgs::default()
    }

    // ── flag mode ─────────────────────────────────────────────────────────

    #[test]
    fn flags_fall_back_to_defaults() {
        let metadata = from_flags(
            &generate_args(),
            &AppConfig::default(),
            &ProjectHints::default(),
            &cwd(),
        )
        .unwrap();

        assert_eq!(metadata.name, "my-tool");
        assert_eq!(metadata.description, DEFAULT_DESCRIPTION);
        assert_eq!(metadata.template, TemplateKind::Standard);
        assert_eq!(metadata.output_path, PathBuf::from("README.md"));
        assert_eq!(metadata.license, None);
        assert!(metadata.features.is_empty());
    }

    #[test]
    fn flags_win_over_hints_and_config() {
        let args = GenerateArgs {
            name: Some("Demo".into()),
            description: Some("From flag".into()),
            template: Some("Fancy".into()),
            license: Some("apache-2.0".into()),
            features: vec!["One".into(), "Two".into()],
            repo: Some("acme/demo".into()),
            ..GenerateArgs::default()
        };
        let hints = ProjectHints {
            project_type: ProjectType::Rust,
            description: Some("From Cargo.toml".into()),
            license: Some(License::Mit),
            repository: Some(RepoRef::from_str("other/repo").unwrap()),
            ..ProjectHints::default()
        };

        let metadata = from_flags(&args, &AppConfig::default(), &hints, &cwd()).unwrap();

        assert_eq!(metadata.description, "From flag");
        assert_eq!(metadata.template, TemplateKind::Fancy);
        assert_eq!(metadata.license, Some(License::Apache2));
        assert_eq!(metadata.features, vec!["One", "Two"]);
        assert_eq!(metadata.repository.unwrap().to_string(), "acme/demo");
        assert_eq!(metadata.project_type, ProjectType::Rust);
    }

    #[test]
    fn hints_fill_gaps() {
        let hints = ProjectHints {
            description: Some("From package.json".into()),
            license: Some(License::Bsd3),
            ..ProjectHints::default()
        };
        let metadata =
            from_flags(&generate_args(), &AppConfig::default(), &hints, &cwd()).unwrap();

        assert_eq!(metadata.description, "From package.json");
        assert_eq!(metadata.license, Some(License::Bsd3));
    }

    #[test]
    fn config_license_beats_hint() {
        let mut config = AppConfig::default();
        config.defaults.license = Some("gpl".into());
        let hints = ProjectHints {
            license: Some(License::Mit),
            ..ProjectHints::default()
        };

        let metadata = from_flags(&generate_args(), &config, &hints, &cwd()).unwrap();
        assert_eq!(metadata.license, Some(License::Gpl3));
    }

    #[test]
    fn unknown_template_is_not_found() {
        let args = GenerateArgs {
            template: Some("bogus".into()),
            ..GenerateArgs::default()
        };
        let err = from_flags(&args, &AppConfig::default(), &ProjectHints::default(), &cwd())
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn invalid_name_is_validation_error() {
        let args = GenerateArgs {
            name: Some("bad/name".into()),
            ..GenerateArgs::default()
        };
        let err = from_flags(&args, &AppConfig::default(), &ProjectHints::default(), &cwd())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(ReadmeError::Domain(DomainError::InvalidProjectName { .. }))
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn bad_license_and_repo_are_user_errors() {
        for args in [
            GenerateArgs {
                license: Some("wtfpl".into()),
                ..GenerateArgs::default()
            },
            GenerateArgs {
                repo: Some("not-a-repo".into()),
                ..GenerateArgs::default()
            },
        ] {
            let err = from_flags(&args, &AppConfig::default(), &ProjectHints::default(), &cwd())
                .unwrap_err();
            match &err {
                CliError::Core(core) => assert_eq!(core.category(), ErrorCategory::Validation),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn directory_name_fallback() {
        assert_eq!(directory_name(Path::new("/")), "my-project");
        assert_eq!(directory_name(Path::new("/tmp/widget")), "widget");
    }

    // ── interactive mode ──────────────────────────────────────────────────

    fn interview(prompter: &ScriptedPrompter, hints: &ProjectHints) -> CliResult<ProjectMetadata> {
        let config = AppConfig::default();
        Interview::new(prompter, &config, hints).run(
            "my-tool",
            &builtin_templates::all(),
            PathBuf::from("README.md"),
        )
    }

    #[test]
    fn interview_with_defaults() {
        // name, description, template, first feature (blank), usage,
        // license, ai, github
        let prompter = ScriptedPrompter::new(["", "", "", "", "", "", "", ""]);

        let metadata = interview(&prompter, &ProjectHints::default()).unwrap();

        assert_eq!(metadata.name, "my-tool");
        assert_eq!(metadata.description, DEFAULT_DESCRIPTION);
        assert_eq!(metadata.template, TemplateKind::Standard);
        assert_eq!(metadata.license, Some(License::Mit));
        assert!(!metadata.ai_enabled);
        assert!(!metadata.github_enabled);
    }

    #[test]
    fn interview_collects_answers_in_order() {
        let prompter = ScriptedPrompter::new([
            "Widget",
            "Makes widgets",
            "2",
            "Fast",
            "Small",
            "",
            "widget --help",
            "1",
            "n",
            "y",
            "acme/widget",
        ]);

        let metadata = interview(&prompter, &ProjectHints::default()).unwrap();

        assert_eq!(metadata.name, "Widget");
        assert_eq!(metadata.description, "Makes widgets");
        assert_eq!(metadata.template, TemplateKind::Fancy);
        assert_eq!(metadata.features, vec!["Fast", "Small"]);
        assert_eq!(metadata.usage_example, "widget --help");
        assert_eq!(metadata.license, Some(License::Apache2));
        assert!(metadata.github_enabled);
        assert_eq!(metadata.repository.unwrap().to_string(), "acme/widget");
    }

    #[test]
    fn invalid_name_is_asked_again() {
        let prompter =
            ScriptedPrompter::new(["bad/name", "Good Name", "", "", "", "", "", "", ""]);

        let metadata = interview(&prompter, &ProjectHints::default()).unwrap();

        assert_eq!(metadata.name, "Good Name");
        assert_eq!(prompter.reports.borrow().len(), 1);
    }

    #[test]
    fn gives_up_after_three_attempts() {
        let prompter = ScriptedPrompter::new(["a/b", "c.d", "e:f", "never asked"]);

        let err = interview(&prompter, &ProjectHints::default()).unwrap_err();

        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(prompter.asked.borrow().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn hints_become_defaults() {
        let hints = ProjectHints {
            description: Some("Probed description".into()),
            license: Some(License::Bsd3),
            features: vec!["A".into(), "B".into()],
            repository: Some(RepoRef::from_str("acme/tool").unwrap()),
            ..ProjectHints::default()
        };
        // name, description, template, keep features?, feature (blank),
        // usage, license, ai, github
        let prompter = ScriptedPrompter::new(["", "", "", "", "", "", "", "", ""]);

        let metadata = interview(&prompter, &hints).unwrap();

        assert_eq!(metadata.description, "Probed description");
        assert_eq!(metadata.template, TemplateKind::Standard);
        assert_eq!(metadata.features, vec!["A", "B"]);
        assert_eq!(metadata.license, Some(License::Bsd3));
        assert!(metadata.github_enabled);
        assert_eq!(metadata.repository.unwrap().to_string(), "acme/tool");
    }

    #[test]
    fn long_feature_list_defaults_to_fancy() {
        let hints = ProjectHints {
            features: (1..=5).map(|i| format!("Feature {i}")).collect(),
            ..ProjectHints::default()
        };
        // name, description, template, keep features?, feature (blank),
        // usage, license, ai, github
        let prompter = ScriptedPrompter::new(["", "", "", "", "", "", "", "", ""]);

        let metadata = interview(&prompter, &hints).unwrap();

        assert_eq!(metadata.template, TemplateKind::Fancy);
        assert_eq!(metadata.features.len(), 5);
    }

    #[test]
    fn running_out_of_answers_cancels() {
        let prompter = ScriptedPrompter::new(["Widget"]);
        assert!(matches!(
            interview(&prompter, &ProjectHints::default()),
            Err(CliError::Cancelled)
        ));
    }
}
