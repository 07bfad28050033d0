//! Name-keyed registry of capability providers.
//!
//! One map per role, each behind its own `RwLock`: a write to the language
//! map never blocks a CI lookup. The registry is constructed explicitly and
//! passed to whoever needs it.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::{
    application::{
        ApplicationError,
        ports::{CiProvider, LanguageProvider},
    },
    domain::{CiCapability, DomainError, LanguageCapability, ProviderRole},
    error::ScotterResult,
};

#[derive(Default)]
pub struct ProviderRegistry {
    languages: RwLock<HashMap<String, Arc<dyn LanguageProvider>>>,
    ci: RwLock<HashMap<String, Arc<dyn CiProvider>>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registration ─────────────────────────────────────────────────────────

    /// Register under the provider's own name. A provider already registered
    /// under that name is replaced.
    pub fn register_language(&self, provider: Arc<dyn LanguageProvider>) -> ScotterResult<()> {
        let name = provider.name().to_string();
        let mut map = self
            .languages
            .write()
            .map_err(|_| ApplicationError::RegistryLock)?;
        if map.insert(name.clone(), provider).is_some() {
            debug!(role = %ProviderRole::Language, %name, "Replaced registered provider");
        }
        Ok(())
    }

    /// Register under the provider's own name. A provider already registered
    /// under that name is replaced.
    pub fn register_ci(&self, provider: Arc<dyn CiProvider>) -> ScotterResult<()> {
        let name = provider.name().to_string();
        let mut map = self.ci.write().map_err(|_| ApplicationError::RegistryLock)?;
        if map.insert(name.clone(), provider).is_some() {
            debug!(role = %ProviderRole::Ci, %name, "Replaced registered provider");
        }
        Ok(())
    }

    // ── Lookup ───────────────────────────────────────────────────────────────

    pub fn language(&self, name: &str) -> ScotterResult<Arc<dyn LanguageProvider>> {
        let map = self
            .languages
            .read()
            .map_err(|_| ApplicationError::RegistryLock)?;
        map.get(name).cloned().ok_or_else(|| {
            DomainError::UnknownCapability {
                role: ProviderRole::Language,
                name: name.to_string(),
                available: sorted_keys(&map),
            }
            .into()
        })
    }

    pub fn ci(&self, name: &str) -> ScotterResult<Arc<dyn CiProvider>> {
        let map = self.ci.read().map_err(|_| ApplicationError::RegistryLock)?;
        map.get(name).cloned().ok_or_else(|| {
            DomainError::UnknownCapability {
                role: ProviderRole::Ci,
                name: name.to_string(),
                available: sorted_keys(&map),
            }
            .into()
        })
    }

    /// Snapshot of registered language providers, in no particular order.
    pub fn languages(&self) -> ScotterResult<Vec<Arc<dyn LanguageProvider>>> {
        let map = self
            .languages
            .read()
            .map_err(|_| ApplicationError::RegistryLock)?;
        Ok(map.values().cloned().collect())
    }

    /// Snapshot of registered CI providers, in no particular order.
    pub fn ci_providers(&self) -> ScotterResult<Vec<Arc<dyn CiProvider>>> {
        let map = self.ci.read().map_err(|_| ApplicationError::RegistryLock)?;
        Ok(map.values().cloned().collect())
    }

    pub fn language_names(&self) -> ScotterResult<Vec<String>> {
        let map = self
            .languages
            .read()
            .map_err(|_| ApplicationError::RegistryLock)?;
        Ok(sorted_keys(&map))
    }

    pub fn ci_names(&self) -> ScotterResult<Vec<String>> {
        let map = self.ci.read().map_err(|_| ApplicationError::RegistryLock)?;
        Ok(sorted_keys(&map))
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("languages", &self.language_names().unwrap_or_default())
            .field("ci", &self.ci_names().unwrap_or_default())
            .finish()
    }
}

fn sorted_keys<V>(map: &HashMap<String, V>) -> Vec<String> {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();
    keys
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::application::ports::GenerationContext;
    use crate::domain::{CiCapability, LanguageCapability};
    use std::sync::Mutex;

    /// Language provider that records generation calls.
    pub struct StubLanguage {
        pub name: &'static str,
        pub platforms: Vec<&'static str>,
        pub architectures: Vec<&'static str>,
        pub assets: Vec<&'static str>,
        pub calls: Mutex<Vec<String>>,
    }

    impl StubLanguage {
        pub fn go() -> Self {
            Self::named("go")
        }

        pub fn named(name: &'static str) -> Self {
            Self {
                name,
                platforms: vec!["linux", "darwin", "windows"],
                architectures: vec!["amd64", "arm64"],
                assets: vec!["checksum", "sbom", "archive"],
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }
    }

    impl LanguageCapability for StubLanguage {
        fn name(&self) -> &str {
            self.name
        }

        fn supported_platforms(&self) -> &[&str] {
            &self.platforms
        }

        fn supported_architectures(&self) -> &[&str] {
            &self.architectures
        }

        fn supported_release_assets(&self) -> &[&str] {
            &self.assets
        }

        fn supported_project_types(&self) -> &[&str] {
            &["default", "library"]
        }
    }

    impl LanguageProvider for StubLanguage {
        fn initialize(&self, _ctx: &GenerationContext<'_>) -> ScotterResult<()> {
            self.record("initialize");
            Ok(())
        }

        fn generate_release_script(&self, _ctx: &GenerationContext<'_>) -> ScotterResult<()> {
            self.record("release");
            Ok(())
        }

        fn on_platform_added(&self, _ctx: &GenerationContext<'_>, platform: &str) -> ScotterResult<()> {
            self.record(format!("platform:{platform}"));
            Ok(())
        }
    }

    pub struct StubCi {
        pub name: &'static str,
        pub languages: Vec<&'static str>,
        pub calls: Mutex<Vec<String>>,
    }

    impl StubCi {
        pub fn github() -> Self {
            Self {
                name: "github",
                languages: vec!["go"],
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CiCapability for StubCi {
        fn name(&self) -> &str {
            self.name
        }

        fn supported_languages(&self) -> &[&str] {
            &self.languages
        }
    }

    impl CiProvider for StubCi {
        fn generate_workflows(&self, ctx: &GenerationContext<'_>) -> ScotterResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("workflows:{}", ctx.config.pipeline_features().join(",")));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::error::ScotterError;

    #[test]
    fn lookup_returns_registered_provider() {
        let registry = ProviderRegistry::new();
        registry.register_language(Arc::new(StubLanguage::go())).unwrap();

        let go = registry.language("go").unwrap();
        assert_eq!(go.name(), "go");
    }

    #[test]
    fn missing_provider_is_unknown_capability() {
        let registry = ProviderRegistry::new();
        registry.register_language(Arc::new(StubLanguage::go())).unwrap();

        let err = registry.language("rust").err().unwrap();
        match err {
            ScotterError::Domain(DomainError::UnknownCapability {
                role,
                name,
                available,
            }) => {
                assert_eq!(role, ProviderRole::Language);
                assert_eq!(name, "rust");
                assert_eq!(available, vec!["go"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(registry.ci("github").is_err());
    }

    #[test]
    fn last_registration_wins() {
        let registry = ProviderRegistry::new();

        let mut first = StubLanguage::go();
        first.platforms = vec!["linux"];
        let mut second = StubLanguage::go();
        second.platforms = vec!["plan9"];

        registry.register_language(Arc::new(first)).unwrap();
        registry.register_language(Arc::new(second)).unwrap();

        let go = registry.language("go").unwrap();
        assert!(go.is_supported_platform("plan9"));
        assert!(!go.is_supported_platform("linux"));
        assert_eq!(registry.languages().unwrap().len(), 1);
    }

    #[test]
    fn roles_are_independent() {
        let registry = ProviderRegistry::new();
        registry.register_ci(Arc::new(StubCi::github())).unwrap();

        assert_eq!(registry.ci_names().unwrap(), vec!["github"]);
        assert!(registry.language_names().unwrap().is_empty());
        assert!(registry.language("github").is_err());
    }

    #[test]
    fn concurrent_registration_and_lookup() {
        const NAMES: [&str; 8] = ["go", "rust", "zig", "c", "d", "nim", "odin", "v"];
        let registry = ProviderRegistry::new();

        std::thread::scope(|s| {
            for name in NAMES {
                let registry = &registry;
                s.spawn(move || {
                    registry
                        .register_language(Arc::new(StubLanguage::named(name)))
                        .unwrap();
                    registry.register_ci(Arc::new(StubCi::github())).unwrap();
                    assert_eq!(registry.language(name).unwrap().name(), name);
                });
            }
        });

        let mut expected: Vec<String> = NAMES.iter().map(|n| n.to_string()).collect();
        expected.sort();
        assert_eq!(registry.language_names().unwrap(), expected);
        assert_eq!(registry.ci_providers().unwrap().len(), 1);
    }
}
