//! Errors as the user sees them: a headline, hints, and an exit code.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use readmegen_core::{
    domain::{DomainError, TemplateKind},
    error::ReadmeError,
};

pub use readmegen_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that never reached the core.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration source could not be read or holds a bad value.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `readmegen-core`.
    #[error("README generation failed: {0}")]
    Core(#[from] ReadmeError),

    /// A terminal or filesystem operation outside the core failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,

    /// Feature not compiled in (e.g. prompts without `interactive`).
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    /// Hints printed under the headline.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => {
                vec!["See 'readmegen help generate' for accepted values".into()]
            }

            Self::ConfigError { .. } => vec![
                format!(
                    "Valid templates: {}",
                    TemplateKind::ALL.map(|t| t.as_str()).join(", ")
                ),
                "Check READMEGEN_* variables in the environment and in .env".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } => {
                vec!["Without a terminal, use 'readmegen generate' with flags".into()]
            }

            Self::Cancelled => vec!["Nothing was written".into()],

            Self::FeatureNotAvailable { feature } => vec![
                format!("Rebuild with: cargo install readmegen-cli --features {feature}"),
                "Or pass everything as flags to 'readmegen generate'".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// The message printed to stderr before exiting.
    ///
    /// With `verbose` the source chain follows the headline; without it the
    /// user is pointed at `-v` when there is a chain to see.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&paint(&format!("  Caused by: {err}"), |t| {
                    t.dimmed().to_string()
                }));
                out.push('\n');
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push('\n');
            out.push_str(&paint("Suggestions:", |t| t.yellow().bold().to_string()));
            out.push('\n');
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose && self.source().is_some() {
            out.push('\n');
            out.push_str(&paint("Run with -v for the underlying cause.", |t| {
                t.dimmed().to_string()
            }));
            out.push('\n');
        }

        out
    }

    /// Record the failure for `-vv` runs. Only [`Self::render`] reaches the
    /// user at default verbosity.
    pub fn log(&self) {
        let cause = self.source().map(ToString::to_string);
        tracing::debug!(
            category = ?self.category(),
            cause,
            exit_code = self.exit_code(),
            "{self}"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input, an existing file, or a cancelled prompt.
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Attach a context message while converting into [`CliError`].
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readmegen_core::application::ApplicationError;
    use std::{io, path::PathBuf};

    fn file_exists() -> CliError {
        CliError::Core(
            ApplicationError::FileExists {
                path: PathBuf::from("README.md"),
            }
            .into(),
        )
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn file_exists_suggests_force() {
        assert!(file_exists().suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn template_not_found_points_at_listing() {
        let err: CliError = DomainError::TemplateNotFound("bogus".into()).into();
        let listing = err
            .suggestions()
            .iter()
            .filter(|s| s.contains("readmegen templates"))
            .count();
        assert_eq!(listing, 1);
    }

    #[test]
    fn config_error_lists_valid_templates() {
        let err = CliError::ConfigError {
            message: "defaults.template = 'bogus'".into(),
            source: None,
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("minimal, standard, fancy"))
        );
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(file_exists().exit_code(), 2);
        assert_eq!(CliError::Cancelled.exit_code(), 2);
        let invalid: CliError = DomainError::InvalidProjectName {
            name: "bad/name".into(),
            reason: "character '/' is not allowed".into(),
        }
        .into();
        assert_eq!(invalid.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err: CliError = DomainError::TemplateNotFound("bogus".into()).into();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        assert_eq!(
            CliError::FeatureNotAvailable {
                feature: "interactive"
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        let io_core = CliError::Core(
            ApplicationError::Io {
                path: PathBuf::from("/readonly/README.md"),
                message: "Permission denied (os error 13)".into(),
            }
            .into(),
        );
        assert_eq!(io_core.exit_code(), 1);
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn plain_render_has_headline_and_hints() {
        let s = file_exists().render(false, false);
        assert!(s.contains("Error: "));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("Run with -v"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn no_verbose_hint_without_a_cause() {
        let s = CliError::Cancelled.render(false, false);
        assert!(s.contains("Error: Operation cancelled"));
        assert!(!s.contains("Run with -v"));
    }

    #[test]
    fn colored_render_uses_ansi() {
        assert!(file_exists().render(false, true).contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_shows_cause() {
        let err = CliError::InvalidInput {
            message: "gave up on name".into(),
            source: Some(Box::new(DomainError::InvalidDescription {
                reason: "description cannot be empty".into(),
            })),
        };
        let s = err.render(true, false);
        assert!(s.contains("Caused by: Invalid description"));
        assert!(!s.contains("Run with -v"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading current directory");
        assert!(matches!(
            cli,
            Err(CliError::IoError { ref message, .. }) if message == "reading current directory"
        ));
    }
}
