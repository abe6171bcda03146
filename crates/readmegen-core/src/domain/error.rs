// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid description: {reason}")]
    InvalidDescription { reason: String },

    #[error("Unknown license '{0}'")]
    UnknownLicense(String),

    #[error("Invalid repository reference '{reference}': {reason}")]
    InvalidRepository { reference: String, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    // ========================================================================
    // Rendering Errors
    // ========================================================================
    #[error("Template '{template}' references unknown placeholder '{{{{{placeholder}}}}}'")]
    UnresolvedPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("Template '{template}' has an unterminated placeholder at byte {offset}")]
    MalformedTemplate { template: String, offset: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use letters, digits, spaces, hyphens, or underscores".into(),
                "Examples: my-project, My Project, project_2025".into(),
            ],
            Self::InvalidDescription { .. } => vec![
                "Provide a short, non-empty description with --description".into(),
            ],
            Self::UnknownLicense(_) => vec![
                "Supported licenses: MIT, Apache 2.0, GPL 3.0, BSD 3-Clause, None".into(),
                "Example: readmegen generate --license apache".into(),
            ],
            Self::InvalidRepository { .. } => {
                vec!["Use the form owner/name, e.g. --repo rust-lang/cargo".into()]
            }
            Self::TemplateNotFound(id) => vec![
                format!("No template named '{}'", id),
                "Available templates: minimal, standard, fancy".into(),
                "List them with: readmegen templates".into(),
            ],
            Self::UnresolvedPlaceholder { .. } | Self::MalformedTemplate { .. } => vec![
                "This is a bug in a built-in template".into(),
                "Try a different template with --template".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::InvalidDescription { .. }
            | Self::UnknownLicense(_)
            | Self::InvalidRepository { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound(_) => ErrorCategory::NotFound,
            Self::UnresolvedPlaceholder { .. } | Self::MalformedTemplate { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
