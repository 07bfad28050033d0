//! Command handlers and the composition root that wires adapters into the
//! core service.

pub mod add;
pub mod completions;
pub mod config;
pub mod features;
pub mod init;
pub mod plugins;
pub mod remove;

use std::sync::Arc;

use scotter_adapters::{LocalFilesystem, YamlConfigStore, register_builtin};
use scotter_core::application::{ProjectService, ProviderRegistry, ports::Filesystem};

use crate::error::CliResult;

/// Registry holding the built-in providers, writing to the local disk.
pub fn builtin_registry(filesystem: Arc<dyn Filesystem>) -> CliResult<Arc<ProviderRegistry>> {
    let registry = ProviderRegistry::new();
    register_builtin(&registry, filesystem)?;
    Ok(Arc::new(registry))
}

/// Service backed by the local filesystem and `.scotter.yaml` records.
pub fn project_service() -> CliResult<ProjectService> {
    let filesystem: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let registry = builtin_registry(filesystem.clone())?;
    let store = Box::new(YamlConfigStore::new(filesystem.clone()));
    Ok(ProjectService::new(registry, store, filesystem))
}
