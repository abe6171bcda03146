//! Application layer for readmegen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ReadmeService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    EnhancerWarning, GenerateReport, GenerateRequest, ReadmeService, TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Enhancer, Filesystem, ProjectInspector, TemplateRenderer, TemplateStore};

pub use error::{ApplicationError, EnhancerError};
