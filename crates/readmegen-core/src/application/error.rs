//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business rules.
//! Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Output file already exists and overwriting was not requested.
    #[error("File already exists: {path}")]
    FileExists { path: PathBuf },

    /// Filesystem operation failed. `message` is the OS error, verbatim.
    #[error("I/O error at {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// A shared adapter's lock was poisoned by a panicking thread.
    #[error("Internal lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileExists { path } => vec![
                format!("'{}' would be overwritten", path.display()),
                "Pass --force or confirm overwrite".into(),
                "Or write somewhere else with --output".into(),
            ],
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Try a different template with --template".into()],
            Self::StoreLockError => vec!["This appears to be a bug in readmegen".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileExists { .. } => ErrorCategory::Validation,
            Self::Io { .. } | Self::RenderingFailed { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}

/// Why an enhancer could not contribute.
///
/// Never fatal: `ReadmeService::enhance` turns these into warnings and keeps
/// the original metadata.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnhancerError {
    #[error("{provider} credentials are not configured (set {env_var})")]
    MissingCredentials {
        provider: &'static str,
        env_var: &'static str,
    },

    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
