//! Scotter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Scotter
//! project scaffolder: pipeline feature resolution, the capability
//! provider registry and the capability-checked project record.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           scotter-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ProjectService, ProviderRegistry)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ConfigStore, Providers)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    scotter-adapters (Infrastructure)    │
//! │ (LocalFilesystem, YamlConfigStore, Go)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (FeatureCatalog, ProjectConfig, caps)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use scotter_core::domain::FeatureCatalog;
//!
//! let catalog = FeatureCatalog::builtin();
//! let resolved = catalog.resolve(["release"]);
//!
//! assert!(resolved.contains("changelog"));
//! assert!(resolved.contains("commit-lint"));
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        GenerationContext, InitReport, InitRequest, ProjectService, ProviderRegistry,
        ports::{CiProvider, ConfigStore, Filesystem, LanguageProvider},
    };
    pub use crate::domain::{
        CapabilityKind, CiCapability, ContainerFormat, Feature, FeatureCatalog,
        LanguageCapability, ProjectConfig, ProviderRole,
    };
    pub use crate::error::{ScotterError, ScotterResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
