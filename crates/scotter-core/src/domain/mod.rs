// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Scotter.
//!
//! Pure business logic: the pipeline feature graph, the capability contracts
//! and the project record. All I/O is handled via ports defined in the
//! application layer.
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **No async**: Domain logic is synchronous
//! - **Few crates**: std, thiserror, and serde for the persisted record
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod features;
pub mod value_objects;

mod validation;

pub use capabilities::{CiCapability, LanguageCapability};
pub use entities::ProjectConfig;
pub use error::{DomainError, ErrorCategory};
pub use features::{Feature, FeatureCatalog, PIPELINE_FEATURES};
pub use validation::DomainValidator;
pub use value_objects::{CapabilityKind, ContainerFormat, ProviderRole};
