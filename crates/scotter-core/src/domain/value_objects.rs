//! Small closed vocabularies shared by the domain and the adapters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

// ── CapabilityKind ───────────────────────────────────────────────────────────

/// The kind of value a project record entry or provider capability holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapabilityKind {
    Platform,
    Architecture,
    ReleaseAsset,
    ProjectType,
    Language,
    PipelineFeature,
}

impl CapabilityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Architecture => "architecture",
            Self::ReleaseAsset => "release asset",
            Self::ProjectType => "project type",
            Self::Language => "language",
            Self::PipelineFeature => "pipeline feature",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ProviderRole ─────────────────────────────────────────────────────────────

/// The two roles a capability provider can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderRole {
    Language,
    Ci,
}

impl ProviderRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Ci => "CI",
        }
    }
}

impl fmt::Display for ProviderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ContainerFormat ──────────────────────────────────────────────────────────

/// Which container build file the `container` pipeline feature produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerFormat {
    #[default]
    Dockerfile,
    Containerfile,
}

impl ContainerFormat {
    pub const ALL: &'static [ContainerFormat] = &[Self::Dockerfile, Self::Containerfile];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dockerfile => "dockerfile",
            Self::Containerfile => "containerfile",
        }
    }

    /// Name of the file written into the project root.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Dockerfile => "Dockerfile",
            Self::Containerfile => "Containerfile",
        }
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dockerfile" | "docker" => Ok(Self::Dockerfile),
            "containerfile" | "podman" => Ok(Self::Containerfile),
            other => Err(DomainError::InvalidProject(format!(
                "unknown container format '{}' (expected dockerfile or containerfile)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_format_parses_aliases() {
        assert_eq!(
            "Docker".parse::<ContainerFormat>().unwrap(),
            ContainerFormat::Dockerfile
        );
        assert_eq!(
            "containerfile".parse::<ContainerFormat>().unwrap(),
            ContainerFormat::Containerfile
        );
        assert!("buildah".parse::<ContainerFormat>().is_err());
    }

    #[test]
    fn container_format_defaults_to_dockerfile() {
        assert_eq!(ContainerFormat::default().file_name(), "Dockerfile");
    }

    #[test]
    fn capability_kind_display_is_human_readable() {
        assert_eq!(CapabilityKind::ReleaseAsset.to_string(), "release asset");
        assert_eq!(ProviderRole::Ci.to_string(), "CI");
    }
}
