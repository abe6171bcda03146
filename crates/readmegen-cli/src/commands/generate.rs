//! Implementation of the `readmegen generate` command.
//!
//! Responsibility: turn flags into metadata, run the core pipeline, and
//! report. No business logic lives here.

use std::env;

use tracing::instrument;

use readmegen_adapters::LocalProjectProbe;
use readmegen_core::application::ProjectInspector;

use crate::{
    cli::GenerateArgs,
    collector,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `readmegen generate` command.
///
/// 1. Probe the current directory for smart defaults
/// 2. Build metadata from flags, config and probe results
/// 3. Enhance, render and write via `ReadmeService`
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = env::current_dir().with_cli_context(|| "reading the current directory")?;
    let hints = LocalProjectProbe::new().inspect(&cwd);

    let metadata = collector::from_flags(&args, &config, &hints, &cwd)?;
    super::write_readme(metadata, args.force, &config, &output)?;

    Ok(())
}
