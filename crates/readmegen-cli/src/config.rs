//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `READMEGEN_*` environment variables, `__` between path segments
//!    (`READMEGEN_DEFAULTS__TEMPLATE=fancy`)
//! 3. Built-in defaults (always present)

use std::{path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use tracing::debug;

use readmegen_adapters::{AiSettings, GithubSettings};
use readmegen_core::domain::{DEFAULT_OUTPUT, License, TemplateKind};

const ENV_PREFIX: &str = "READMEGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallbacks for values not given on the command line.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Enhancer endpoints and limits.
    pub enhancers: EnhancerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub template: String,
    pub license: Option<String>,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub ai_endpoint: String,
    pub ai_model: String,
    pub github_api_url: String,
    pub timeout_secs: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            template: TemplateKind::default().as_str().into(),
            license: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        let ai = AiSettings::default();
        let github = GithubSettings::default();
        Self {
            ai_endpoint: ai.endpoint,
            ai_model: ai.model,
            github_api_url: github.api_url,
            timeout_secs: ai.timeout.as_secs(),
        }
    }
}

impl AppConfig {
    /// Built-in defaults overlaid with the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(None)
    }

    /// Like [`Self::load`], but reads variables from `vars` instead of the
    /// process environment when given.
    pub fn load_from(vars: Option<config::Map<String, String>>) -> anyhow::Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("Invalid built-in defaults")?)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Failed to parse configuration")?;

        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        TemplateKind::from_str(&self.defaults.template)
            .with_context(|| format!("defaults.template = '{}'", self.defaults.template))?;
        if let Some(license) = &self.defaults.license {
            License::from_str(license)
                .with_context(|| format!("defaults.license = '{license}'"))?;
        }
        if self.defaults.output.as_os_str().is_empty() {
            anyhow::bail!("defaults.output cannot be empty");
        }
        if self.enhancers.timeout_secs == 0 {
            anyhow::bail!("enhancers.timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// Validated in [`Self::load_from`]; the fallback only guards against
    /// a hand-built config.
    pub fn default_template(&self) -> TemplateKind {
        TemplateKind::from_str(&self.defaults.template).unwrap_or_default()
    }

    pub fn default_license(&self) -> Option<License> {
        self.defaults
            .license
            .as_deref()
            .and_then(|l| License::from_str(l).ok())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.enhancers.timeout_secs)
    }

    pub fn ai_settings(&self, api_key: Option<String>) -> AiSettings {
        AiSettings {
            endpoint: self.enhancers.ai_endpoint.clone(),
            model: self.enhancers.ai_model.clone(),
            api_key,
            timeout: self.timeout(),
        }
    }

    pub fn github_settings(&self, token: Option<String>) -> GithubSettings {
        GithubSettings {
            api_url: self.enhancers.github_api_url.clone(),
            token,
            timeout: self.timeout(),
        }
    }
}
