//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `readmegen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: file operations
//!   - `TemplateStore`: built-in template lookup
//!   - `TemplateRenderer`: placeholder substitution
//!   - `Enhancer`: optional remote metadata sources (AI, GitHub)
//!   - `ProjectInspector`: smart defaults from the working directory
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Enhancer, Filesystem, ProjectInspector, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockEnhancer, MockFilesystem, MockTemplateRenderer, MockTemplateStore};
