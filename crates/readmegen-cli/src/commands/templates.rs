//! Implementation of the `readmegen templates` command.

use std::io;

use crate::{
    cli::{TemplatesArgs, TemplatesFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Lines of template content shown under each card.
const PREVIEW_LINES: usize = 4;

pub fn execute(args: TemplatesArgs, output: OutputManager) -> CliResult<()> {
    let service = super::template_service();
    let templates = service.list()?;

    match args.format {
        TemplatesFormat::Table => {
            output.header("Available Templates:")?;
            for template in &templates {
                output.print("")?;
                output.header(&format!("{} ({})", template.title, template.id))?;
                output.print(&format!("  {}", template.description))?;
                output.print(&format!("  Includes: {}", template.includes.join(", ")))?;
                output.print(&format!("  Best for: {}", template.best_for))?;
                output.detail("  Preview:")?;
                for line in service.preview(template.id.as_str(), PREVIEW_LINES)? {
                    output.detail(&format!("    \u{2502} {line}"))?;
                }
            }
            output.print("")?;
            output.info("Use one with: readmegen generate --template <id>")?;
        }

        // Machine-readable formats bypass OutputManager so they stay
        // parseable in pipes and under --quiet.
        TemplatesFormat::List => {
            for t in &templates {
                println!("{}", t.id);
            }
        }

        TemplatesFormat::Json => {
            let json = serde_json::to_string_pretty(&templates).map_err(|e| CliError::IoError {
                message: "failed to serialise templates".into(),
                source: io::Error::other(e),
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
