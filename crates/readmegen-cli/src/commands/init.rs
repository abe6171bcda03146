//! `readmegen init`: ask a few questions, then write the README.

use std::{env, path::Path};

use tracing::{debug, instrument};

use readmegen_adapters::LocalProjectProbe;
use readmegen_core::{application::ProjectInspector, domain::ProjectMetadata};

use crate::{
    cli::InitArgs,
    collector::{self, Interview},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::{self, Prompter},
};

/// Execute the `readmegen init` command.
#[instrument(skip_all)]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let prompter = prompt::terminal_prompter()?;
    let cwd = env::current_dir().with_cli_context(|| "reading the current directory")?;

    output.header("\u{1f4dd} readmegen: let's write a README")?;
    output.print("")?;

    let (metadata, force) = interview(&args, &config, prompter.as_ref(), &cwd)?;
    super::write_readme(metadata, force, &config, &output)?;

    Ok(())
}

/// Confirm any overwrite first, then run the questions.
///
/// Returns the metadata and whether overwriting was approved. Declining
/// the overwrite is [`CliError::Cancelled`]; nothing is asked after that.
fn interview(
    args: &InitArgs,
    config: &AppConfig,
    prompter: &dyn Prompter,
    cwd: &Path,
) -> CliResult<(ProjectMetadata, bool)> {
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| config.defaults.output.clone());

    let mut force = args.force;
    if !force && cwd.join(&output_path).exists() {
        let question = format!("{} already exists. Overwrite it?", output_path.display());
        if !prompter.confirm(&question, false)? {
            debug!(path = %output_path.display(), "Overwrite declined");
            return Err(CliError::Cancelled);
        }
        force = true;
    }

    let hints = LocalProjectProbe::new().inspect(cwd);
    let templates = super::template_service().list()?;
    let metadata = Interview::new(prompter, config, &hints).run(
        &collector::directory_name(cwd),
        &templates,
        output_path,
    )?;

    Ok((metadata, force))
}
