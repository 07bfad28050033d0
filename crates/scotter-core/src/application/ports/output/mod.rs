//! Driven (output) ports - implemented by infrastructure.
//!
//! The `scotter-adapters` crate provides implementations.

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::{CiCapability, LanguageCapability, ProjectConfig};
use crate::error::ScotterResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `scotter_adapters::filesystem::LocalFilesystem` (production)
/// - `scotter_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScotterResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ScotterResult<()>;

    fn read_file(&self, path: &Path) -> ScotterResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the persisted project record.
///
/// `project_root` is the project directory; where inside it the record
/// lives is the adapter's business.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    fn load(&self, project_root: &Path) -> ScotterResult<ProjectConfig>;

    fn save(&self, project_root: &Path, config: &ProjectConfig) -> ScotterResult<()>;

    fn exists(&self, project_root: &Path) -> bool;
}

/// Everything a provider gets when asked to generate files.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    pub project_root: &'a Path,
    pub config: &'a ProjectConfig,
    pub options: &'a BTreeMap<String, Value>,
}

impl<'a> GenerationContext<'a> {
    /// Context whose options are the record's extension map.
    pub fn new(project_root: &'a Path, config: &'a ProjectConfig) -> Self {
        Self {
            project_root,
            config,
            options: config.extra_config(),
        }
    }

    /// String option lookup.
    pub fn option_str(&self, key: &str) -> Option<&'a str> {
        self.options.get(key).and_then(Value::as_str)
    }
}

/// A language provider: capability sets plus project generation.
///
/// Implemented by `scotter_adapters::providers::GoLanguageProvider`.
pub trait LanguageProvider: LanguageCapability {
    /// Write the language's standard project layout.
    fn initialize(&self, ctx: &GenerationContext<'_>) -> ScotterResult<()>;

    /// Write (or rewrite) the release tooling configuration from the
    /// record's platforms, architectures and release assets.
    fn generate_release_script(&self, ctx: &GenerationContext<'_>) -> ScotterResult<()>;

    /// Called after `platform` was added to the record in `ctx`.
    fn on_platform_added(&self, ctx: &GenerationContext<'_>, platform: &str) -> ScotterResult<()> {
        let _ = platform;
        self.generate_release_script(ctx)
    }

    fn on_architecture_added(
        &self,
        ctx: &GenerationContext<'_>,
        architecture: &str,
    ) -> ScotterResult<()> {
        let _ = architecture;
        self.generate_release_script(ctx)
    }

    fn on_release_asset_added(&self, ctx: &GenerationContext<'_>, asset: &str) -> ScotterResult<()> {
        let _ = asset;
        self.generate_release_script(ctx)
    }
}

/// A CI provider: supported languages plus workflow generation.
///
/// Implemented by `scotter_adapters::providers::GitHubActionsProvider`.
pub trait CiProvider: CiCapability {
    /// Write workflow files for the record's pipeline features.
    fn generate_workflows(&self, ctx: &GenerationContext<'_>) -> ScotterResult<()>;
}
