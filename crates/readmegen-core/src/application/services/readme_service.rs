//! README Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Run the requested enhancers (never fatal)
//! 2. Render the chosen template with the final metadata
//! 3. Write the result with overwrite protection
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, EnhancerError,
        ports::{Enhancer, Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{DomainValidator as validator, ProjectMetadata, RenderContext, TemplateKind},
    error::ReadmeResult,
};

/// An enhancer that could not contribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancerWarning {
    pub enhancer: &'static str,
    pub error: EnhancerError,
}

impl fmt::Display for EnhancerWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} enhancer skipped: {}", self.enhancer, self.error)
    }
}

/// Input for [`ReadmeService::generate`].
pub struct GenerateRequest<'a> {
    pub metadata: ProjectMetadata,
    pub enhancers: &'a [Box<dyn Enhancer>],
    pub force: bool,
}

/// What [`ReadmeService::generate`] did.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub bytes_written: usize,
    /// Metadata after enhancement, as rendered.
    pub metadata: ProjectMetadata,
    pub warnings: Vec<EnhancerWarning>,
}

/// Main README service.
///
/// Orchestrates the enhance, render, and write workflow.
pub struct ReadmeService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ReadmeService {
    /// Create a new README service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use readmegen_core::application::ReadmeService;
    ///
    /// let service = ReadmeService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Render `metadata` with the template named `template_id`.
    ///
    /// Pure with respect to its inputs: equal metadata renders to equal
    /// bytes.
    #[instrument(skip_all, fields(template = %template_id, project = %metadata.name))]
    pub fn render(&self, template_id: &str, metadata: &ProjectMetadata) -> ReadmeResult<String> {
        validator::validate_metadata(metadata)?;

        let kind = TemplateKind::from_str(template_id)?;
        let template = self.store.get(kind)?;
        let context = RenderContext::from_metadata(metadata);

        let rendered = self.renderer.render(&template, &context)?;
        debug!(bytes = rendered.len(), "Template rendered");
        Ok(rendered)
    }

    /// Run each enhancer in order, merging whatever it returns.
    ///
    /// Never fails. An enhancer error becomes a warning and leaves the
    /// metadata as it was before that enhancer ran.
    #[instrument(skip_all, fields(project = %metadata.name, enhancers = enhancers.len()))]
    pub fn enhance(
        &self,
        metadata: ProjectMetadata,
        enhancers: &[Box<dyn Enhancer>],
    ) -> (ProjectMetadata, Vec<EnhancerWarning>) {
        let mut current = metadata;
        let mut warnings = Vec::new();

        for enhancer in enhancers {
            match enhancer.enhance(&current) {
                Ok(enhancement) if enhancement.is_empty() => {
                    debug!(enhancer = enhancer.name(), "Enhancer returned nothing");
                }
                Ok(enhancement) => {
                    let (next, applied) = enhancement.apply(&current);
                    if validator::validate_metadata(&next).is_ok() {
                        info!(enhancer = enhancer.name(), fields = ?applied, "Enhancement applied");
                        current = next;
                    } else {
                        warn!(enhancer = enhancer.name(), "Enhancement rejected by validation");
                    }
                }
                Err(error) => {
                    warn!(enhancer = enhancer.name(), error = %error, "Enhancer failed");
                    warnings.push(EnhancerWarning {
                        enhancer: enhancer.name(),
                        error,
                    });
                }
            }
        }

        (current, warnings)
    }

    /// Write `content` to `path`.
    ///
    /// Refuses to replace an existing file unless `force` is set. Missing
    /// parent directories are created.
    #[instrument(skip_all, fields(path = %path.display(), bytes = content.len(), force = force))]
    pub fn write(&self, path: &Path, content: &str, force: bool) -> ReadmeResult<()> {
        self.ensure_writable(path, force)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.filesystem.exists(parent) {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem.write_file(path, content)?;
        info!("README written");
        Ok(())
    }

    /// Enhance, render, and write in one go.
    ///
    /// The overwrite check runs first, so nothing is fetched for a file that
    /// would be refused anyway.
    #[instrument(skip_all, fields(project = %request.metadata.name))]
    pub fn generate(&self, request: GenerateRequest<'_>) -> ReadmeResult<GenerateReport> {
        let GenerateRequest {
            metadata,
            enhancers,
            force,
        } = request;

        self.ensure_writable(&metadata.output_path, force)?;

        let (metadata, warnings) = self.enhance(metadata, enhancers);
        let content = self.render(metadata.template.as_str(), &metadata)?;
        self.write(&metadata.output_path, &content, force)?;

        Ok(GenerateReport {
            path: metadata.output_path.clone(),
            bytes_written: content.len(),
            metadata,
            warnings,
        })
    }

    fn ensure_writable(&self, path: &Path, force: bool) -> ReadmeResult<()> {
        if !force && self.filesystem.exists(path) {
            return Err(ApplicationError::FileExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }
}
