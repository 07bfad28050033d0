//! Application services - orchestrate use cases.

pub mod project_service;

pub use project_service::{
    FeatureChange, InitReport, InitRequest, ProjectService, SeedDefaults, SkippedSeed,
};
