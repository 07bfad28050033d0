//! Application ports (traits) for external dependencies.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ConfigStore`: Project record persistence
//!   - `LanguageProvider` / `CiProvider`: Capability providers with generation entry points
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CiProvider, ConfigStore, Filesystem, GenerationContext, LanguageProvider};

#[cfg(test)]
pub use output::MockConfigStore;
