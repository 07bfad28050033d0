//! Capability contracts answered by providers.
//!
//! A provider reports the finite sets it supports; the membership predicates
//! are what the project record uses to gate mutations. Generation entry
//! points live on the application-layer supertraits
//! (`application::ports::LanguageProvider` / `CiProvider`), so the domain
//! stays free of I/O.

use crate::domain::value_objects::CapabilityKind;

// ── Language ─────────────────────────────────────────────────────────────────

/// What a language provider can build and release.
pub trait LanguageCapability: Send + Sync {
    /// Registry key and the value stored in a project's `language` field.
    fn name(&self) -> &str;

    fn supported_platforms(&self) -> &[&str];

    fn supported_architectures(&self) -> &[&str];

    fn supported_release_assets(&self) -> &[&str];

    fn supported_project_types(&self) -> &[&str];

    /// Project type used when the caller does not pick one.
    fn default_project_type(&self) -> &str {
        self.supported_project_types()
            .first()
            .copied()
            .unwrap_or("default")
    }

    fn is_supported_platform(&self, platform: &str) -> bool {
        self.supported_platforms().iter().any(|p| *p == platform)
    }

    fn is_supported_architecture(&self, architecture: &str) -> bool {
        self.supported_architectures()
            .iter()
            .any(|a| *a == architecture)
    }

    fn is_supported_release_asset(&self, asset: &str) -> bool {
        self.supported_release_assets().iter().any(|a| *a == asset)
    }

    fn is_supported_project_type(&self, project_type: &str) -> bool {
        self.supported_project_types()
            .iter()
            .any(|t| *t == project_type)
    }

    /// The supported set for `kind`; empty for kinds a language does not gate.
    fn supported(&self, kind: CapabilityKind) -> &[&str] {
        match kind {
            CapabilityKind::Platform => self.supported_platforms(),
            CapabilityKind::Architecture => self.supported_architectures(),
            CapabilityKind::ReleaseAsset => self.supported_release_assets(),
            CapabilityKind::ProjectType => self.supported_project_types(),
            CapabilityKind::Language | CapabilityKind::PipelineFeature => &[],
        }
    }

    fn is_supported(&self, kind: CapabilityKind, value: &str) -> bool {
        match kind {
            CapabilityKind::Platform => self.is_supported_platform(value),
            CapabilityKind::Architecture => self.is_supported_architecture(value),
            CapabilityKind::ReleaseAsset => self.is_supported_release_asset(value),
            CapabilityKind::ProjectType => self.is_supported_project_type(value),
            CapabilityKind::Language | CapabilityKind::PipelineFeature => false,
        }
    }
}

// ── Continuous integration ───────────────────────────────────────────────────

/// Which languages a CI provider can generate workflows for.
pub trait CiCapability: Send + Sync {
    fn name(&self) -> &str;

    fn supported_languages(&self) -> &[&str];

    fn supports_language(&self, language: &str) -> bool {
        self.supported_languages().iter().any(|l| *l == language)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Hand-written providers for domain and service tests.

    use super::*;

    pub struct FakeLanguage {
        pub name: &'static str,
        pub platforms: Vec<&'static str>,
        pub architectures: Vec<&'static str>,
        pub assets: Vec<&'static str>,
        pub project_types: Vec<&'static str>,
    }

    impl FakeLanguage {
        pub fn go() -> Self {
            Self {
                name: "go",
                platforms: vec!["linux", "darwin", "windows", "amd64"],
                architectures: vec!["amd64", "arm64"],
                assets: vec!["checksum", "sbom", "archive"],
                project_types: vec!["default", "library", "cli"],
            }
        }
    }

    impl LanguageCapability for FakeLanguage {
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
            &self.project_types
        }
    }

    pub struct FakeCi {
        pub name: &'static str,
        pub languages: Vec<&'static str>,
    }

    impl CiCapability for FakeCi {
        fn name(&self) -> &str {
            self.name
        }

        fn supported_languages(&self) -> &[&str] {
            &self.languages
        }
    }
}
