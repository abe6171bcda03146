//! Infrastructure adapters for readmegen.
//!
//! This crate implements the ports defined in `readmegen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod enhancers;
pub mod filesystem;
pub mod probe;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use enhancers::{AiEnhancer, AiSettings, GithubEnhancer, GithubSettings};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use probe::LocalProjectProbe;
pub use renderer::SimpleRenderer;
pub use template_store::BuiltinTemplateStore;
