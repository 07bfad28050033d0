//! The persisted project record.
//!
//! `ProjectConfig` is what `.scotter.yaml` holds. Every list entry passes a
//! capability check when it is added; nothing is re-checked on load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{
    CapabilityKind, CiCapability, ContainerFormat, DomainError, FeatureCatalog,
    LanguageCapability,
};

/// Project state accumulated over `init`, `add` and `remove` commands.
///
/// Invariants:
/// - `platforms`, `architectures`, `release_assets` and `pipeline_features`
///   hold no duplicates
/// - `pipeline_features` is closed under prerequisites
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    project_name: String,

    project_type: String,

    language: String,

    #[serde(default)]
    platforms: Vec<String>,

    #[serde(default)]
    architectures: Vec<String>,

    #[serde(default)]
    release_assets: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    ci_provider: Option<String>,

    #[serde(default)]
    pipeline_features: Vec<String>,

    #[serde(default)]
    container_format: ContainerFormat,

    /// Provider-specific data; opaque to the core.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    extra_config: BTreeMap<String, serde_json::Value>,
}

impl ProjectConfig {
    pub fn new(
        project_name: impl Into<String>,
        project_type: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            project_type: project_type.into(),
            language: language.into(),
            ..Self::default()
        }
    }

    /// Structural checks on scalar fields and list uniqueness.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.project_name.trim().is_empty() {
            return Err(DomainError::InvalidProject(
                "project name cannot be empty".into(),
            ));
        }
        if self
            .project_name
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_whitespace())
        {
            return Err(DomainError::InvalidProject(format!(
                "project name '{}' must not contain path separators or whitespace",
                self.project_name
            )));
        }
        if self.language.is_empty() {
            return Err(DomainError::InvalidProject("language is required".into()));
        }

        for (kind, values) in [
            (CapabilityKind::Platform, &self.platforms),
            (CapabilityKind::Architecture, &self.architectures),
            (CapabilityKind::ReleaseAsset, &self.release_assets),
            (CapabilityKind::PipelineFeature, &self.pipeline_features),
        ] {
            for (i, value) in values.iter().enumerate() {
                if values[..i].contains(value) {
                    return Err(DomainError::AlreadyExists {
                        kind,
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_type(&self) -> &str {
        &self.project_type
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    pub fn architectures(&self) -> &[String] {
        &self.architectures
    }

    pub fn release_assets(&self) -> &[String] {
        &self.release_assets
    }

    pub fn ci_provider(&self) -> Option<&str> {
        self.ci_provider.as_deref()
    }

    pub fn pipeline_features(&self) -> &[String] {
        &self.pipeline_features
    }

    pub fn has_feature(&self, id: &str) -> bool {
        self.pipeline_features.iter().any(|f| f == id)
    }

    pub fn container_format(&self) -> ContainerFormat {
        self.container_format
    }

    pub fn set_container_format(&mut self, format: ContainerFormat) {
        self.container_format = format;
    }

    pub fn extra_config(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.extra_config
    }

    /// Values recorded for a list-valued kind; `None` for scalar kinds.
    pub fn entries(&self, kind: CapabilityKind) -> Option<&[String]> {
        match kind {
            CapabilityKind::Platform => Some(&self.platforms),
            CapabilityKind::Architecture => Some(&self.architectures),
            CapabilityKind::ReleaseAsset => Some(&self.release_assets),
            CapabilityKind::PipelineFeature => Some(&self.pipeline_features),
            CapabilityKind::ProjectType | CapabilityKind::Language => None,
        }
    }

    // ── Capability-gated mutations ───────────────────────────────────────────

    pub fn add_platform<P>(&mut self, platform: &str, provider: &P) -> Result<(), DomainError>
    where
        P: LanguageCapability + ?Sized,
    {
        self.add_entry(CapabilityKind::Platform, platform, provider)
    }

    pub fn add_architecture<P>(
        &mut self,
        architecture: &str,
        provider: &P,
    ) -> Result<(), DomainError>
    where
        P: LanguageCapability + ?Sized,
    {
        self.add_entry(CapabilityKind::Architecture, architecture, provider)
    }

    pub fn add_release_asset<P>(&mut self, asset: &str, provider: &P) -> Result<(), DomainError>
    where
        P: LanguageCapability + ?Sized,
    {
        self.add_entry(CapabilityKind::ReleaseAsset, asset, provider)
    }

    pub fn remove_platform(&mut self, platform: &str) -> Result<(), DomainError> {
        self.remove_entry(CapabilityKind::Platform, platform)
    }

    pub fn remove_architecture(&mut self, architecture: &str) -> Result<(), DomainError> {
        self.remove_entry(CapabilityKind::Architecture, architecture)
    }

    pub fn remove_release_asset(&mut self, asset: &str) -> Result<(), DomainError> {
        self.remove_entry(CapabilityKind::ReleaseAsset, asset)
    }

    /// Add `value` to the list for `kind` after the provider accepts it.
    ///
    /// Order of checks: support, then duplicate. A rejected value leaves the
    /// record untouched.
    pub fn add_entry<P>(
        &mut self,
        kind: CapabilityKind,
        value: &str,
        provider: &P,
    ) -> Result<(), DomainError>
    where
        P: LanguageCapability + ?Sized,
    {
        if !provider.is_supported(kind, value) {
            return Err(DomainError::UnsupportedCapability {
                kind,
                value: value.to_string(),
                provider: provider.name().to_string(),
                supported: provider
                    .supported(kind)
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            });
        }

        let list = self.list_mut(kind)?;
        if list.iter().any(|v| v == value) {
            return Err(DomainError::AlreadyExists {
                kind,
                value: value.to_string(),
            });
        }
        list.push(value.to_string());
        Ok(())
    }

    /// Remove `value` from the list for `kind`. No capability check.
    pub fn remove_entry(&mut self, kind: CapabilityKind, value: &str) -> Result<(), DomainError> {
        let list = self.list_mut(kind)?;
        match list.iter().position(|v| v == value) {
            Some(index) => {
                list.remove(index);
                Ok(())
            }
            None => Err(DomainError::NotFound {
                kind,
                value: value.to_string(),
            }),
        }
    }

    /// Lists open to the generic add/remove path. Pipeline features are
    /// excluded: they must stay closed under prerequisites.
    fn list_mut(&mut self, kind: CapabilityKind) -> Result<&mut Vec<String>, DomainError> {
        match kind {
            CapabilityKind::Platform => Ok(&mut self.platforms),
            CapabilityKind::Architecture => Ok(&mut self.architectures),
            CapabilityKind::ReleaseAsset => Ok(&mut self.release_assets),
            CapabilityKind::PipelineFeature => Err(DomainError::InvalidProject(
                "pipeline features change through add_feature/remove_feature".into(),
            )),
            CapabilityKind::ProjectType | CapabilityKind::Language => Err(
                DomainError::InvalidProject(format!("{} is not a list field", kind)),
            ),
        }
    }

    // ── CI provider ──────────────────────────────────────────────────────────

    /// Record `provider` as the project's CI provider if it supports the
    /// project language.
    pub fn set_ci_provider<C>(&mut self, provider: &C) -> Result<(), DomainError>
    where
        C: CiCapability + ?Sized,
    {
        if !provider.supports_language(&self.language) {
            return Err(DomainError::UnsupportedCapability {
                kind: CapabilityKind::Language,
                value: self.language.clone(),
                provider: provider.name().to_string(),
                supported: provider
                    .supported_languages()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            });
        }
        self.ci_provider = Some(provider.name().to_string());
        Ok(())
    }

    // ── Pipeline features ────────────────────────────────────────────────────

    /// Replace the feature list with the closure of `selected`.
    pub fn set_pipeline_features<I, S>(
        &mut self,
        selected: I,
        catalog: &FeatureCatalog,
    ) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resolved = catalog.resolve_validated(selected)?;
        self.pipeline_features = resolved.into_iter().collect();
        Ok(())
    }

    /// Enable `id` and whatever it requires. Returns every id that was newly
    /// enabled, `id` included.
    pub fn add_feature(
        &mut self,
        id: &str,
        catalog: &FeatureCatalog,
    ) -> Result<Vec<String>, DomainError> {
        catalog.validate_selection([id])?;
        if self.has_feature(id) {
            return Err(DomainError::AlreadyExists {
                kind: CapabilityKind::PipelineFeature,
                value: id.to_string(),
            });
        }

        let resolved =
            catalog.resolve(self.pipeline_features.iter().cloned().chain([id.to_string()]));
        let added: Vec<String> = resolved
            .iter()
            .filter(|f| !self.has_feature(f))
            .cloned()
            .collect();
        self.pipeline_features = resolved.into_iter().collect();
        Ok(added)
    }

    /// Disable `id`. Refused while another enabled feature requires it.
    pub fn remove_feature(&mut self, id: &str, catalog: &FeatureCatalog) -> Result<(), DomainError> {
        if !self.has_feature(id) {
            return Err(DomainError::NotFound {
                kind: CapabilityKind::PipelineFeature,
                value: id.to_string(),
            });
        }

        let required_by = catalog.dependents_of(id, &self.pipeline_features);
        if !required_by.is_empty() {
            return Err(DomainError::FeatureRequired {
                id: id.to_string(),
                required_by,
            });
        }

        self.pipeline_features.retain(|f| f != id);
        Ok(())
    }

    // ── Extension map ────────────────────────────────────────────────────────

    pub fn set_extra(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.extra_config.insert(key.into(), value);
    }

    pub fn get_extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra_config.get(key)
    }

    pub fn remove_extra(&mut self, key: &str) -> Option<serde_json::Value> {
        self.extra_config.remove(key)
    }
}
