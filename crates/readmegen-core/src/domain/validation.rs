use crate::domain::{entities::ProjectMetadata, error::DomainError};

/// Longest accepted project name, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A project name is non-empty, not only whitespace, at most
    /// [`MAX_NAME_LEN`] characters, and drawn from `[A-Za-z0-9 _-]`.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: String| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason,
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty or only whitespace".into()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(invalid(format!(
                "name cannot be longer than {MAX_NAME_LEN} characters"
            )));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_')))
        {
            return Err(invalid(format!(
                "character '{bad}' is not allowed; use letters, digits, spaces, hyphens, or underscores"
            )));
        }
        Ok(())
    }

    pub fn validate_description(description: &str) -> Result<(), DomainError> {
        if description.trim().is_empty() {
            return Err(DomainError::InvalidDescription {
                reason: "description cannot be empty".into(),
            });
        }
        Ok(())
    }

    pub fn validate_metadata(metadata: &ProjectMetadata) -> Result<(), DomainError> {
        Self::validate_project_name(&metadata.name)?;
        Self::validate_description(&metadata.description)?;
        if metadata.output_path.as_os_str().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "output_path",
            });
        }
        Ok(())
    }
}
