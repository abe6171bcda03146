//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and display results. The
//! wiring shared by `init` and `generate` lives here.

use tracing::{info, instrument};

use readmegen_adapters::{
    AiEnhancer, AiSettings, BuiltinTemplateStore, GithubEnhancer, GithubSettings,
    LocalFilesystem, SimpleRenderer,
};
use readmegen_core::{
    application::{Enhancer, GenerateReport, GenerateRequest, ReadmeService, TemplateService},
    domain::ProjectMetadata,
};

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod templates;

fn readme_service() -> ReadmeService {
    ReadmeService::new(
        Box::new(BuiltinTemplateStore::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

fn template_service() -> TemplateService {
    TemplateService::new(Box::new(BuiltinTemplateStore::new()))
}

/// Enhancers requested by `metadata`, in the order they run.
///
/// Credentials come from the environment only; a missing one is reported
/// by the enhancer itself as a warning.
fn enhancers_for(metadata: &ProjectMetadata, config: &AppConfig) -> Vec<Box<dyn Enhancer>> {
    let mut enhancers: Vec<Box<dyn Enhancer>> = Vec::new();
    if metadata.github_enabled {
        enhancers.push(Box::new(GithubEnhancer::new(
            config.github_settings(GithubSettings::token_from_env()),
        )));
    }
    if metadata.ai_enabled {
        enhancers.push(Box::new(AiEnhancer::new(
            config.ai_settings(AiSettings::api_key_from_env()),
        )));
    }
    enhancers
}

/// Enhance, render and write `metadata`, then tell the user what happened.
#[instrument(skip_all, fields(project = %metadata.name, force = force))]
fn write_readme(
    metadata: ProjectMetadata,
    force: bool,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<GenerateReport> {
    let enhancers = enhancers_for(&metadata, config);
    let spinner = if enhancers.is_empty() {
        None
    } else {
        output.spinner("Enhancing project details...")
    };

    let result = readme_service().generate(GenerateRequest {
        metadata,
        enhancers: &enhancers,
        force,
    });

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let report = result?;

    for warning in &report.warnings {
        output.warning(&warning.to_string())?;
    }
    info!(
        path = %report.path.display(),
        bytes = report.bytes_written,
        "README written"
    );
    output.success(&format!(
        "Created {} ({} template, {} bytes)",
        report.path.display(),
        report.metadata.template,
        report.bytes_written,
    ))?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(ai: bool, github: bool) -> ProjectMetadata {
        ProjectMetadata::builder()
            .name("demo")
            .ai_enabled(ai)
            .github_enabled(github)
            .build()
            .unwrap()
    }

    #[test]
    fn no_enhancers_unless_asked() {
        assert!(enhancers_for(&metadata(false, false), &AppConfig::default()).is_empty());
    }

    #[test]
    fn github_runs_before_ai() {
        let names: Vec<_> = enhancers_for(&metadata(true, true), &AppConfig::default())
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(names, vec!["github", "ai"]);
    }
}
