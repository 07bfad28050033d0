//! YAML-backed project record store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use scotter_core::{
    application::{
        ApplicationError,
        ports::{ConfigStore, Filesystem},
    },
    domain::ProjectConfig,
    error::ScotterResult,
};

/// File name of the project record inside a project root.
pub const CONFIG_FILE_NAME: &str = ".scotter.yaml";

/// Reads and writes `<root>/.scotter.yaml` through a [`Filesystem`].
#[derive(Clone)]
pub struct YamlConfigStore {
    filesystem: Arc<dyn Filesystem>,
}

impl YamlConfigStore {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    pub fn path_for(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self, project_root: &Path) -> ScotterResult<ProjectConfig> {
        let path = Self::path_for(project_root);
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::ConfigNotFound { path }.into());
        }

        let raw = self.filesystem.read_file(&path)?;
        let config = serde_yaml::from_str(&raw).map_err(|e| ApplicationError::ConfigParse {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        debug!(path = %path.display(), "Loaded project configuration");
        Ok(config)
    }

    fn save(&self, project_root: &Path, config: &ProjectConfig) -> ScotterResult<()> {
        let path = Self::path_for(project_root);
        let yaml = serde_yaml::to_string(config).map_err(|e| ApplicationError::ConfigParse {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        self.filesystem.create_dir_all(project_root)?;
        self.filesystem.write_file(&path, &yaml)?;

        debug!(path = %path.display(), "Saved project configuration");
        Ok(())
    }

    fn exists(&self, project_root: &Path) -> bool {
        self.filesystem.exists(&Self::path_for(project_root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use scotter_core::error::ScotterError;

    fn store() -> (YamlConfigStore, MemoryFilesystem) {
        let fs = MemoryFilesystem::new();
        (YamlConfigStore::new(Arc::new(fs.clone())), fs)
    }

    #[test]
    fn saved_record_loads_back_equal() {
        let (store, _) = store();
        let root = Path::new("/work/demo");
        let mut config = ProjectConfig::new("demo", "cli", "go");
        config.set_extra("owner", serde_json::json!("acme"));

        store.save(root, &config).unwrap();

        assert!(store.exists(root));
        assert_eq!(store.load(root).unwrap(), config);
    }

    #[test]
    fn record_is_plain_yaml_with_snake_case_keys() {
        let (store, fs) = store();
        let root = Path::new("/work/demo");
        store
            .save(root, &ProjectConfig::new("demo", "library", "go"))
            .unwrap();

        let raw = fs.contents(root.join(CONFIG_FILE_NAME)).unwrap();
        assert!(raw.contains("project_name: demo"));
        assert!(raw.contains("project_type: library"));
        assert!(raw.contains("container_format: dockerfile"));
        assert!(!raw.contains("ci_provider"));
    }

    #[test]
    fn missing_record_is_config_not_found() {
        let (store, _) = store();
        let err = store.load(Path::new("/nowhere")).unwrap_err();
        assert!(matches!(
            err,
            ScotterError::Application(ApplicationError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn malformed_yaml_is_config_parse_error() {
        let (store, fs) = store();
        let root = Path::new("/work/bad");
        fs.create_dir_all(root).unwrap();
        fs.write_file(&root.join(CONFIG_FILE_NAME), "project_name: [unclosed")
            .unwrap();

        let err = store.load(root).unwrap_err();
        assert!(matches!(
            err,
            ScotterError::Application(ApplicationError::ConfigParse { .. })
        ));
    }

    #[test]
    fn hand_written_record_without_optional_fields_loads() {
        let (store, fs) = store();
        let root = Path::new("/work/min");
        fs.create_dir_all(root).unwrap();
        fs.write_file(
            &root.join(CONFIG_FILE_NAME),
            "project_name: min\nproject_type: default\nlanguage: go\nplatforms:\n  - linux\n",
        )
        .unwrap();

        let config = store.load(root).unwrap();
        assert_eq!(config.platforms(), ["linux"]);
        assert!(config.architectures().is_empty());
    }
}
