//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a README" or "list templates".

pub mod readme_service;
pub mod template_service;

pub use readme_service::{EnhancerWarning, GenerateReport, GenerateRequest, ReadmeService};
pub use template_service::TemplateService;
