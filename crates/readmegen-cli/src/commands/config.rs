//! `readmegen config`: show the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Every key `config get` understands, in `config list` order.
const KEYS: [&str; 8] = [
    "defaults.template",
    "defaults.license",
    "defaults.output",
    "output.no_color",
    "enhancers.ai_endpoint",
    "enhancers.ai_model",
    "enhancers.github_api_url",
    "enhancers.timeout_secs",
];

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            println!("{value}");
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            println!("{serialised}");
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "defaults.template" => config.defaults.template.clone(),
        "defaults.license" => config.defaults.license.clone().unwrap_or_default(),
        "defaults.output" => config.defaults.output.display().to_string(),
        "output.no_color" => config.output.no_color.to_string(),
        "enhancers.ai_endpoint" => config.enhancers.ai_endpoint.clone(),
        "enhancers.ai_model" => config.enhancers.ai_model.clone(),
        "enhancers.github_api_url" => config.enhancers.github_api_url.clone(),
        "enhancers.timeout_secs" => config.enhancers.timeout_secs.to_string(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
                source: None,
            });
        }
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.template").unwrap(), "standard");
        assert_eq!(get_config_value(&cfg, "enhancers.timeout_secs").unwrap(), "10");
    }

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "key: {key}");
        }
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        let err = get_config_value(&cfg, "does.not.exist").unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn unset_license_is_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.license").unwrap(), "");
    }
}
