//! Project Service - orchestrates the project lifecycle use cases.
//!
//! Every mutation follows the same gate:
//! 1. Load the project record
//! 2. Resolve the provider for the record's language (or the requested CI)
//! 3. Apply the capability-checked change to the in-memory record and
//!    validate the whole record
//! 4. Let the provider regenerate what depends on it
//! 5. Persist the record
//!
//! A failure at any step leaves the persisted record unchanged. A failure
//! before step 4 leaves every generated file unchanged too.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ProviderRegistry,
        ports::{ConfigStore, Filesystem, GenerationContext},
    },
    domain::{
        CapabilityKind, CiCapability, ContainerFormat, DomainError,
        DomainValidator as validator, FeatureCatalog, LanguageCapability, ProjectConfig,
    },
    error::ScotterResult,
};

// ── Requests & reports ───────────────────────────────────────────────────────

/// Values `init` tries to add to a new project. Each one is checked against
/// the language provider; rejected values are skipped, not fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedDefaults {
    pub platforms: Vec<String>,
    pub architectures: Vec<String>,
    pub release_assets: Vec<String>,
}

impl SeedDefaults {
    /// linux/darwin/windows on amd64/arm64 with checksum, sbom and archive.
    pub fn standard() -> Self {
        fn owned(xs: &[&str]) -> Vec<String> {
            xs.iter().map(|s| s.to_string()).collect()
        }
        Self {
            platforms: owned(&["linux", "darwin", "windows"]),
            architectures: owned(&["amd64", "arm64"]),
            release_assets: owned(&["checksum", "sbom", "archive"]),
        }
    }

    fn entries(&self) -> Vec<(CapabilityKind, &str)> {
        let mut out = Vec::new();
        for (kind, values) in [
            (CapabilityKind::Platform, &self.platforms),
            (CapabilityKind::Architecture, &self.architectures),
            (CapabilityKind::ReleaseAsset, &self.release_assets),
        ] {
            out.extend(values.iter().map(|v| (kind, v.as_str())));
        }
        out
    }
}

#[derive(Debug, Clone, Default)]
pub struct InitRequest {
    pub project_root: PathBuf,
    pub project_name: String,
    pub language: String,
    /// `None` picks the language's default project type.
    pub project_type: Option<String>,
    pub ci_provider: Option<String>,
    pub features: Vec<String>,
    pub container_format: ContainerFormat,
    pub seed: SeedDefaults,
    /// Provider options, recorded in the project's extension map.
    pub extra: BTreeMap<String, serde_json::Value>,
    /// Overwrite an existing project record.
    pub force: bool,
}

/// A seed value the language provider turned down.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedSeed {
    pub kind: CapabilityKind,
    pub value: String,
    pub reason: DomainError,
}

#[derive(Debug, Clone)]
pub struct InitReport {
    pub config: ProjectConfig,
    /// Features enabled only because a selected feature requires them.
    pub implied_features: BTreeSet<String>,
    pub skipped: Vec<SkippedSeed>,
}

/// Result of a feature mutation.
#[derive(Debug, Clone)]
pub struct FeatureChange {
    pub config: ProjectConfig,
    /// Ids that changed state, sorted.
    pub changed: Vec<String>,
}

// ── Service ──────────────────────────────────────────────────────────────────

pub struct ProjectService {
    registry: Arc<ProviderRegistry>,
    store: Box<dyn ConfigStore>,
    filesystem: Arc<dyn Filesystem>,
    catalog: FeatureCatalog,
}

impl ProjectService {
    pub fn new(
        registry: Arc<ProviderRegistry>,
        store: Box<dyn ConfigStore>,
        filesystem: Arc<dyn Filesystem>,
    ) -> Self {
        Self {
            registry,
            store,
            filesystem,
            catalog: FeatureCatalog::builtin(),
        }
    }

    /// Replace the built-in feature catalog.
    pub fn with_catalog(mut self, catalog: FeatureCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    pub fn load(&self, project_root: &Path) -> ScotterResult<ProjectConfig> {
        self.store.load(project_root)
    }

    // ── init ─────────────────────────────────────────────────────────────────

    /// Create a new project.
    ///
    /// Provider, project type, CI and features are hard requirements; seed
    /// values are best-effort and reported back in [`InitReport::skipped`].
    #[instrument(
        skip_all,
        fields(
            project = %request.project_name,
            language = %request.language,
            root = %request.project_root.display()
        )
    )]
    pub fn init_project(&self, request: InitRequest) -> ScotterResult<InitReport> {
        let language = self.registry.language(&request.language)?;
        let project_type = request
            .project_type
            .clone()
            .unwrap_or_else(|| language.default_project_type().to_string());

        let mut config = ProjectConfig::new(&request.project_name, project_type, language.name());
        config.set_container_format(request.container_format);
        for (key, value) in &request.extra {
            config.set_extra(key.clone(), value.clone());
        }
        config.set_pipeline_features(&request.features, &self.catalog)?;
        validator::validate_new_project(&config, &*language)?;

        let ci = match &request.ci_provider {
            Some(name) => {
                let ci = self.registry.ci(name)?;
                config.set_ci_provider(&*ci)?;
                Some(ci)
            }
            None => None,
        };

        let root = request.project_root.as_path();
        if self.store.exists(root) && !request.force {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }
        self.filesystem.create_dir_all(root)?;

        let mut skipped = Vec::new();
        for (kind, value) in request.seed.entries() {
            if let Err(reason) = config.add_entry(kind, value, &*language) {
                warn!(%kind, value, error = %reason, "Skipping default");
                skipped.push(SkippedSeed {
                    kind,
                    value: value.to_string(),
                    reason,
                });
            }
        }

        self.check(&config)?;
        self.store.save(root, &config)?;

        let ctx = GenerationContext::new(root, &config);
        language.initialize(&ctx)?;
        language.generate_release_script(&ctx)?;
        if let Some(ci) = &ci {
            ci.generate_workflows(&ctx)?;
        }

        info!(
            features = config.pipeline_features().len(),
            skipped = skipped.len(),
            "Project initialized"
        );

        Ok(InitReport {
            implied_features: self.catalog.implied_by(request.features),
            config,
            skipped,
        })
    }

    // ── Capability-gated list mutations ──────────────────────────────────────

    pub fn add_platform(&self, project_root: &Path, platform: &str) -> ScotterResult<ProjectConfig> {
        self.add_capability(project_root, CapabilityKind::Platform, platform)
    }

    pub fn add_architecture(
        &self,
        project_root: &Path,
        architecture: &str,
    ) -> ScotterResult<ProjectConfig> {
        self.add_capability(project_root, CapabilityKind::Architecture, architecture)
    }

    pub fn add_release_asset(
        &self,
        project_root: &Path,
        asset: &str,
    ) -> ScotterResult<ProjectConfig> {
        self.add_capability(project_root, CapabilityKind::ReleaseAsset, asset)
    }

    pub fn remove_platform(
        &self,
        project_root: &Path,
        platform: &str,
    ) -> ScotterResult<ProjectConfig> {
        self.remove_capability(project_root, CapabilityKind::Platform, platform)
    }

    pub fn remove_architecture(
        &self,
        project_root: &Path,
        architecture: &str,
    ) -> ScotterResult<ProjectConfig> {
        self.remove_capability(project_root, CapabilityKind::Architecture, architecture)
    }

    pub fn remove_release_asset(
        &self,
        project_root: &Path,
        asset: &str,
    ) -> ScotterResult<ProjectConfig> {
        self.remove_capability(project_root, CapabilityKind::ReleaseAsset, asset)
    }

    #[instrument(skip(self), fields(root = %project_root.display()))]
    pub fn add_capability(
        &self,
        project_root: &Path,
        kind: CapabilityKind,
        value: &str,
    ) -> ScotterResult<ProjectConfig> {
        let mut config = self.store.load(project_root)?;
        let language = self.registry.language(config.language())?;

        config.add_entry(kind, value, &*language)?;
        self.check(&config)?;

        let ctx = GenerationContext::new(project_root, &config);
        match kind {
            CapabilityKind::Platform => language.on_platform_added(&ctx, value)?,
            CapabilityKind::Architecture => language.on_architecture_added(&ctx, value)?,
            CapabilityKind::ReleaseAsset => language.on_release_asset_added(&ctx, value)?,
            _ => {}
        }

        self.store.save(project_root, &config)?;
        info!(%kind, value, "Added");
        Ok(config)
    }

    /// Removal never consults the provider's supported sets.
    #[instrument(skip(self), fields(root = %project_root.display()))]
    pub fn remove_capability(
        &self,
        project_root: &Path,
        kind: CapabilityKind,
        value: &str,
    ) -> ScotterResult<ProjectConfig> {
        let mut config = self.store.load(project_root)?;
        config.remove_entry(kind, value)?;
        self.check(&config)?;
        self.store.save(project_root, &config)?;
        info!(%kind, value, "Removed");

        self.refresh_release_script(project_root, &config);
        Ok(config)
    }

    // ── CI ───────────────────────────────────────────────────────────────────

    #[instrument(skip(self), fields(root = %project_root.display()))]
    pub fn add_ci(&self, project_root: &Path, provider: &str) -> ScotterResult<ProjectConfig> {
        let mut config = self.store.load(project_root)?;
        let ci = self.registry.ci(provider)?;

        config.set_ci_provider(&*ci)?;
        self.check(&config)?;

        ci.generate_workflows(&GenerationContext::new(project_root, &config))?;
        self.refresh_release_script(project_root, &config);
        self.store.save(project_root, &config)?;
        info!(provider = ci.name(), "CI provider configured");
        Ok(config)
    }

    // ── Pipeline features ────────────────────────────────────────────────────

    #[instrument(skip(self), fields(root = %project_root.display()))]
    pub fn add_feature(&self, project_root: &Path, id: &str) -> ScotterResult<FeatureChange> {
        let mut config = self.store.load(project_root)?;
        let changed = config.add_feature(id, &self.catalog)?;
        self.check(&config)?;

        self.regenerate_workflows(project_root, &config)?;
        self.store.save(project_root, &config)?;

        info!(added = ?changed, "Pipeline features enabled");
        Ok(FeatureChange { config, changed })
    }

    #[instrument(skip(self), fields(root = %project_root.display()))]
    pub fn remove_feature(&self, project_root: &Path, id: &str) -> ScotterResult<FeatureChange> {
        let mut config = self.store.load(project_root)?;
        config.remove_feature(id, &self.catalog)?;
        self.check(&config)?;

        self.regenerate_workflows(project_root, &config)?;
        self.store.save(project_root, &config)?;

        info!(removed = id, "Pipeline feature disabled");
        Ok(FeatureChange {
            config,
            changed: vec![id.to_string()],
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Gate for a mutated record. Runs before any provider writes a file and
    /// before the record is saved; loading trusts the file.
    fn check(&self, config: &ProjectConfig) -> ScotterResult<()> {
        validator::validate_project_config(config)?;
        validator::validate_features(config, &self.catalog)?;
        Ok(())
    }

    /// Regenerate workflows when the project has a CI provider.
    fn regenerate_workflows(&self, project_root: &Path, config: &ProjectConfig) -> ScotterResult<()> {
        match config.ci_provider() {
            Some(name) => {
                let ci = self.registry.ci(name)?;
                ci.generate_workflows(&GenerationContext::new(project_root, config))
            }
            None => {
                debug!("No CI provider configured, skipping workflow generation");
                Ok(())
            }
        }
    }

    /// Best-effort: the record is already consistent without it.
    fn refresh_release_script(&self, project_root: &Path, config: &ProjectConfig) {
        let ctx = GenerationContext::new(project_root, config);
        let result = self
            .registry
            .language(config.language())
            .and_then(|language| language.generate_release_script(&ctx));

        if let Err(e) = result {
            warn!(error = %e, "Could not regenerate release configuration");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockConfigStore;
    use crate::application::registry::fixtures::{StubCi, StubLanguage};
    use crate::error::ScotterError;
    use std::sync::Mutex;

    /// Filesystem double that only records created directories.
    #[derive(Default)]
    struct DirRecorder {
        dirs: Mutex<Vec<PathBuf>>,
    }

    impl Filesystem for DirRecorder {
        fn create_dir_all(&self, path: &Path) -> ScotterResult<()> {
            self.dirs.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
        fn write_file(&self, _path: &Path, _content: &str) -> ScotterResult<()> {
            Ok(())
        }
        fn read_file(&self, path: &Path) -> ScotterResult<String> {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not supported".into(),
            }
            .into())
        }
        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    struct Harness {
        language: Arc<StubLanguage>,
        ci: Arc<StubCi>,
        registry: Arc<ProviderRegistry>,
    }

    impl Harness {
        fn new() -> Self {
            let language = Arc::new(StubLanguage::go());
            let ci = Arc::new(StubCi::github());
            let registry = Arc::new(ProviderRegistry::new());
            registry.register_language(language.clone()).unwrap();
            registry.register_ci(ci.clone()).unwrap();
            Self {
                language,
                ci,
                registry,
            }
        }

        fn service(&self, store: MockConfigStore) -> ProjectService {
            ProjectService::new(
                self.registry.clone(),
                Box::new(store),
                Arc::new(DirRecorder::default()),
            )
        }
    }

    fn existing(config: ProjectConfig) -> MockConfigStore {
        let mut store = MockConfigStore::new();
        store
            .expect_load()
            .returning(move |_| Ok(config.clone()));
        store
    }

    fn request() -> InitRequest {
        InitRequest {
            project_root: PathBuf::from("/work/demo"),
            project_name: "demo".into(),
            language: "go".into(),
            seed: SeedDefaults::standard(),
            ..InitRequest::default()
        }
    }

    #[test]
    fn init_seeds_defaults_and_runs_generators() {
        let h = Harness::new();
        let mut store = MockConfigStore::new();
        store.expect_exists().return_const(false);
        store
            .expect_save()
            .withf(|root, cfg| {
                root == Path::new("/work/demo")
                    && cfg.platforms() == ["linux", "darwin", "windows"]
                    && cfg.ci_provider() == Some("github")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let report = h
            .service(store)
            .init_project(InitRequest {
                ci_provider: Some("github".into()),
                features: vec!["release".into()],
                ..request()
            })
            .unwrap();

        assert_eq!(report.config.project_type(), "default");
        assert_eq!(report.config.architectures(), ["amd64", "arm64"]);
        assert_eq!(
            report.config.pipeline_features(),
            ["changelog", "commit-lint", "release"]
        );
        assert_eq!(
            report.implied_features.into_iter().collect::<Vec<_>>(),
            vec!["changelog", "commit-lint"]
        );
        assert!(report.skipped.is_empty());
        assert_eq!(h.language.calls(), vec!["initialize", "release"]);
        assert_eq!(h.ci.calls(), vec!["workflows:changelog,commit-lint,release"]);
    }

    #[test]
    fn init_skips_unsupported_seed_values() {
        let h = Harness::new();
        let mut store = MockConfigStore::new();
        store.expect_exists().return_const(false);
        store.expect_save().times(1).returning(|_, _| Ok(()));

        let mut req = request();
        req.seed.platforms.push("plan9".into());
        req.seed.architectures.push("amd64".into());

        let report = h.service(store).init_project(req).unwrap();

        let skipped: Vec<_> = report
            .skipped
            .iter()
            .map(|s| (s.kind, s.value.as_str()))
            .collect();
        assert_eq!(
            skipped,
            vec![
                (CapabilityKind::Platform, "plan9"),
                (CapabilityKind::Architecture, "amd64")
            ]
        );
        assert!(!report.config.platforms().iter().any(|p| p == "plan9"));
    }

    #[test]
    fn init_refuses_existing_project_unless_forced() {
        let h = Harness::new();
        let mut store = MockConfigStore::new();
        store.expect_exists().return_const(true);
        store.expect_save().times(0);

        let err = h.service(store).init_project(request()).unwrap_err();
        assert!(matches!(
            err,
            ScotterError::Application(ApplicationError::ProjectExists { .. })
        ));

        let mut store = MockConfigStore::new();
        store.expect_exists().return_const(true);
        store.expect_save().times(1).returning(|_, _| Ok(()));
        let forced = InitRequest {
            force: true,
            ..request()
        };
        assert!(h.service(store).init_project(forced).is_ok());
    }

    #[test]
    fn init_rejects_unknown_language_and_features() {
        let h = Harness::new();

        let err = h
            .service(MockConfigStore::new())
            .init_project(InitRequest {
                language: "cobol".into(),
                ..request()
            })
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::UnknownCapability { .. })
        ));

        let err = h
            .service(MockConfigStore::new())
            .init_project(InitRequest {
                features: vec!["deploy".into()],
                ..request()
            })
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::UnknownFeature { .. })
        ));

        let err = h
            .service(MockConfigStore::new())
            .init_project(InitRequest {
                project_type: Some("plugin".into()),
                ..request()
            })
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::UnsupportedCapability {
                kind: CapabilityKind::ProjectType,
                ..
            })
        ));
    }

    #[test]
    fn add_platform_calls_hook_then_saves() {
        let h = Harness::new();
        let mut store = existing(ProjectConfig::new("demo", "default", "go"));
        store
            .expect_save()
            .withf(|_, cfg| cfg.platforms() == ["linux"])
            .times(1)
            .returning(|_, _| Ok(()));

        let cfg = h
            .service(store)
            .add_platform(Path::new("/work/demo"), "linux")
            .unwrap();

        assert_eq!(cfg.platforms(), ["linux"]);
        assert_eq!(h.language.calls(), vec!["platform:linux"]);
    }

    #[test]
    fn unsupported_value_is_never_saved() {
        let h = Harness::new();
        let mut store = existing(ProjectConfig::new("demo", "default", "go"));
        store.expect_save().times(0);

        let err = h
            .service(store)
            .add_architecture(Path::new("/work/demo"), "riscv64")
            .unwrap_err();

        assert!(matches!(
            err.as_domain(),
            Some(DomainError::UnsupportedCapability {
                kind: CapabilityKind::Architecture,
                ..
            })
        ));
        assert!(h.language.calls().is_empty());
    }

    #[test]
    fn remove_absent_platform_is_not_found() {
        let h = Harness::new();
        let mut store = existing(ProjectConfig::new("demo", "default", "go"));
        store.expect_save().times(0);

        let err = h
            .service(store)
            .remove_platform(Path::new("/work/demo"), "solaris")
            .unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::NotFound { .. })));
    }

    #[test]
    fn remove_works_without_registered_language() {
        let registry = Arc::new(ProviderRegistry::new());
        let mut cfg = ProjectConfig::new("demo", "default", "go");
        cfg.add_release_asset("sbom", &StubLanguage::go()).unwrap();

        let mut store = existing(cfg);
        store.expect_save().times(1).returning(|_, _| Ok(()));
        let service = ProjectService::new(registry, Box::new(store), Arc::new(DirRecorder::default()));

        let cfg = service
            .remove_release_asset(Path::new("/work/demo"), "sbom")
            .unwrap();
        assert!(cfg.release_assets().is_empty());
    }

    #[test]
    fn add_ci_rejects_unsupported_language() {
        let h = Harness::new();
        h.registry
            .register_ci(Arc::new(StubCi {
                name: "gitlab",
                languages: vec!["rust"],
                calls: Mutex::new(Vec::new()),
            }))
            .unwrap();
        let mut store = existing(ProjectConfig::new("demo", "default", "go"));
        store.expect_save().times(0);

        let err = h
            .service(store)
            .add_ci(Path::new("/work/demo"), "gitlab")
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::UnsupportedCapability {
                kind: CapabilityKind::Language,
                ..
            })
        ));
    }

    #[test]
    fn add_feature_regenerates_workflows() {
        let h = Harness::new();
        let mut cfg = ProjectConfig::new("demo", "default", "go");
        cfg.set_ci_provider(h.ci.as_ref()).unwrap();
        let mut store = existing(cfg);
        store.expect_save().times(1).returning(|_, _| Ok(()));

        let change = h
            .service(store)
            .add_feature(Path::new("/work/demo"), "changelog")
            .unwrap();

        assert_eq!(change.changed, vec!["changelog", "commit-lint"]);
        assert_eq!(h.ci.calls(), vec!["workflows:changelog,commit-lint"]);
    }

    #[test]
    fn remove_feature_refuses_required_prerequisite() {
        let h = Harness::new();
        let mut cfg = ProjectConfig::new("demo", "default", "go");
        cfg.set_pipeline_features(["release"], &FeatureCatalog::builtin())
            .unwrap();
        let mut store = existing(cfg);
        store.expect_save().times(0);

        let err = h
            .service(store)
            .remove_feature(Path::new("/work/demo"), "commit-lint")
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::FeatureRequired { .. })
        ));
    }

    fn hand_edited(extra: serde_json::Value) -> ProjectConfig {
        let mut record = serde_json::json!({
            "project_name": "demo",
            "project_type": "default",
            "language": "go",
        });
        if let (Some(record), Some(extra)) = (record.as_object_mut(), extra.as_object()) {
            record.extend(extra.clone());
        }
        serde_json::from_value(record).unwrap()
    }

    #[test]
    fn hand_edited_record_with_open_features_is_not_saved() {
        let h = Harness::new();
        let mut store = existing(hand_edited(serde_json::json!({
            "pipeline_features": ["release"],
        })));
        store.expect_save().times(0);

        let err = h
            .service(store)
            .add_platform(Path::new("/work/demo"), "linux")
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::InvalidProject(_))
        ));
        assert!(h.language.calls().is_empty());
    }

    #[test]
    fn add_ci_on_invalid_record_generates_nothing() {
        let h = Harness::new();
        let mut store = existing(hand_edited(serde_json::json!({
            "pipeline_features": ["release"],
        })));
        store.expect_save().times(0);

        let err = h
            .service(store)
            .add_ci(Path::new("/work/demo"), "github")
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::InvalidProject(_))
        ));
        assert!(h.ci.calls().is_empty());
        assert!(h.language.calls().is_empty());
    }

    #[test]
    fn add_feature_on_invalid_record_generates_nothing() {
        let h = Harness::new();
        let mut store = existing(hand_edited(serde_json::json!({
            "platforms": ["linux", "linux"],
            "ci_provider": "github",
        })));
        store.expect_save().times(0);

        let err = h
            .service(store)
            .add_feature(Path::new("/work/demo"), "ci")
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::AlreadyExists {
                kind: CapabilityKind::Platform,
                ..
            })
        ));
        assert!(h.ci.calls().is_empty());
    }

    #[test]
    fn init_records_provider_options() {
        let h = Harness::new();
        let mut store = MockConfigStore::new();
        store.expect_exists().return_const(false);
        store
            .expect_save()
            .withf(|_, cfg| cfg.get_extra("taskfile") == Some(&serde_json::json!(false)))
            .times(1)
            .returning(|_, _| Ok(()));

        let report = h
            .service(store)
            .init_project(InitRequest {
                extra: BTreeMap::from([("taskfile".to_string(), serde_json::json!(false))]),
                ..request()
            })
            .unwrap();

        assert_eq!(
            report.config.get_extra("taskfile"),
            Some(&serde_json::json!(false))
        );
    }
}
