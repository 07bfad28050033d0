//! Infrastructure adapters for Scotter.
//!
//! Implements the ports defined in `scotter_core::application::ports`:
//! filesystems, the YAML project record store, and the built-in Go and
//! GitHub Actions providers.

pub mod config_store;
pub mod filesystem;
pub mod providers;
pub mod render;

use std::sync::Arc;

use scotter_core::{
    application::{ProviderRegistry, ports::Filesystem},
    error::ScotterResult,
};

pub use config_store::{CONFIG_FILE_NAME, YamlConfigStore};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use providers::{GitHubActionsProvider, GoLanguageProvider};

/// Register every built-in provider, all writing through `filesystem`.
pub fn register_builtin(
    registry: &ProviderRegistry,
    filesystem: Arc<dyn Filesystem>,
) -> ScotterResult<()> {
    registry.register_language(Arc::new(GoLanguageProvider::new(filesystem.clone())))?;
    registry.register_ci(Arc::new(GitHubActionsProvider::new(filesystem)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scotter_core::application::ProjectService;
    use scotter_core::domain::CiCapability;
    use std::path::{Path, PathBuf};

    #[test]
    fn builtin_providers_are_registered() {
        let registry = ProviderRegistry::default();
        register_builtin(&registry, Arc::new(MemoryFilesystem::new())).unwrap();

        assert_eq!(registry.language_names().unwrap(), vec!["go".to_string()]);
        assert_eq!(registry.ci_names().unwrap(), vec!["github".to_string()]);
        assert!(registry.ci("github").unwrap().supports_language("go"));
    }

    #[test]
    fn refused_mutation_leaves_generated_files_alone() {
        let fs = MemoryFilesystem::new();
        let shared: Arc<dyn Filesystem> = Arc::new(fs.clone());
        let registry = Arc::new(ProviderRegistry::new());
        register_builtin(&registry, shared.clone()).unwrap();

        let root = Path::new("/work/demo");
        shared.create_dir_all(root).unwrap();
        shared
            .write_file(
                &root.join(CONFIG_FILE_NAME),
                "project_name: demo\nproject_type: default\nlanguage: go\npipeline_features:\n  - release\n",
            )
            .unwrap();

        let service = ProjectService::new(
            registry,
            Box::new(YamlConfigStore::new(shared.clone())),
            shared,
        );
        assert!(service.add_platform(root, "linux").is_err());
        assert!(service.add_ci(root, "github").is_err());

        assert_eq!(fs.list_files_under(root), vec![PathBuf::from(CONFIG_FILE_NAME)]);
    }
}
