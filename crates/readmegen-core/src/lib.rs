//! readmegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the readmegen
//! README scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          readmegen-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ReadmeService, TemplateService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Store, Renderer, Filesystem, Enhancer) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    readmegen-adapters (Infrastructure)  │
//! │ (BuiltinTemplateStore, LocalFilesystem) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectMetadata, TemplateDefinition)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use readmegen_core::prelude::*;
//!
//! // 1. Collect metadata
//! let metadata = ProjectMetadata::builder()
//!     .name("my-project")
//!     .description("Does one thing well")
//!     .template(TemplateKind::Fancy)
//!     .build()?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = ReadmeService::new(store, renderer, filesystem);
//! let report = service.generate(GenerateRequest {
//!     metadata,
//!     enhancers: &[],
//!     force: false,
//! })?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EnhancerError, EnhancerWarning, GenerateReport, GenerateRequest, ReadmeService,
        TemplateService,
        ports::{Enhancer, Filesystem, ProjectInspector, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Enhancement, License, ProjectHints, ProjectMetadata, ProjectMetadataBuilder, ProjectType,
        RenderContext, RepoRef, TemplateDefinition, TemplateKind,
    };
    pub use crate::error::{ReadmeError, ReadmeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
