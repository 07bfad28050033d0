//! Application layer for Scotter.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectService)
//! - **Registry**: Name-keyed capability providers (ProviderRegistry)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Business rules live in `crate::domain`; this layer only sequences them.

pub mod error;
pub mod ports;
pub mod registry;
pub mod services;

pub use error::ApplicationError;
pub use ports::{CiProvider, ConfigStore, Filesystem, GenerationContext, LanguageProvider};
pub use registry::ProviderRegistry;
pub use services::{
    FeatureChange, InitReport, InitRequest, ProjectService, SeedDefaults, SkippedSeed,
};
