//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! owns it; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Environment variables, `SCOTTER__SECTION__KEY`
//! 3. Config file (`--config`, or the per-user path)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "SCOTTER";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used by `scotter init` when flags are omitted.
    pub defaults: Defaults,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub language: String,
    pub project_type: Option<String>,
    pub ci_provider: Option<String>,
    pub features: Vec<String>,
    pub container_format: String,
    pub platforms: Vec<String>,
    pub architectures: Vec<String>,
    pub release_assets: Vec<String>,
    /// Whether `init` writes a `Taskfile.yml`.
    pub taskfile: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        let seed = scotter_core::application::SeedDefaults::standard();
        Self {
            language: "go".into(),
            project_type: None,
            ci_provider: Some("github".into()),
            features: Vec::new(),
            container_format: "dockerfile".into(),
            platforms: seed.platforms,
            architectures: seed.architectures,
            release_assets: seed.release_assets,
            taskfile: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration layered over the built-in defaults.
    ///
    /// An explicit `config_file` must exist; the per-user file is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path.as_path()).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("defaults.features")
                    .with_list_parse_key("defaults.platforms")
                    .with_list_parse_key("defaults.architectures")
                    .with_list_parse_key("defaults.release_assets"),
            )
            .build()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has an invalid shape")
    }

    /// Path to the per-user configuration file.
    ///
    /// Falls back to `.scotter.toml` in the current directory when no home
    /// directory can be determined.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "scotter", "scotter")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".scotter.toml"))
    }

    /// The file `config init` writes to and `config path` reports.
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Look up a dotted key such as `defaults.language`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let mut value = serde_json::to_value(self).ok()?;
        for part in key.split('.') {
            value = value.get_mut(part)?.take();
        }
        Some(value)
    }
}
