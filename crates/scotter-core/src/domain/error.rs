// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::{CapabilityKind, ProviderRole};

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("{kind} '{value}' already exists")]
    AlreadyExists { kind: CapabilityKind, value: String },

    #[error("invalid project configuration: {0}")]
    InvalidProject(String),

    #[error("feature '{id}' is required by: {}", required_by.join(", "))]
    FeatureRequired { id: String, required_by: Vec<String> },

    // ========================================================================
    // Compatibility Errors
    // ========================================================================
    #[error("{kind} '{value}' is not supported by {provider}")]
    UnsupportedCapability {
        kind: CapabilityKind,
        value: String,
        provider: String,
        supported: Vec<String>,
    },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("{role} provider '{name}' not found")]
    UnknownCapability {
        role: ProviderRole,
        name: String,
        available: Vec<String>,
    },

    #[error("{kind} '{value}' not found")]
    NotFound { kind: CapabilityKind, value: String },

    #[error("unknown pipeline feature '{id}'")]
    UnknownFeature { id: String, available: Vec<String> },

    // ========================================================================
    // Programming Errors
    // ========================================================================
    #[error("malformed feature catalog: {reason}")]
    MalformedCatalog { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownCapability {
                role, available, ..
            } => {
                let mut out = vec![format!("Registered {} providers:", role)];
                if available.is_empty() {
                    out.push("  (none)".into());
                }
                out.extend(available.iter().map(|n| format!("  • {}", n)));
                out.push("Try: scotter plugins".into());
                out
            }
            Self::UnsupportedCapability {
                kind,
                provider,
                supported,
                ..
            } => vec![
                format!("{} supports these values for {}:", provider, kind),
                format!("  {}", supported.join(", ")),
            ],
            Self::AlreadyExists { kind, value } => vec![format!(
                "Nothing to do: {} '{}' is already configured",
                kind, value
            )],
            Self::NotFound { kind, .. } => vec![
                format!("Only configured {} values can be removed", kind),
                "Inspect .scotter.yaml to see the current configuration".into(),
            ],
            Self::UnknownFeature { available, .. } => vec![
                format!("Available features: {}", available.join(", ")),
                "Try: scotter features".into(),
            ],
            Self::FeatureRequired { required_by, .. } => vec![format!(
                "Remove the dependent features first: {}",
                required_by.join(", ")
            )],
            Self::InvalidProject(msg) => vec![
                "Check the project settings".into(),
                format!("Details: {}", msg),
            ],
            Self::MalformedCatalog { .. } => vec![
                "The feature catalog is inconsistent".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } | Self::InvalidProject(_) | Self::FeatureRequired { .. } => {
                ErrorCategory::Validation
            }
            Self::UnsupportedCapability { .. } => ErrorCategory::Compatibility,
            Self::UnknownCapability { .. } | Self::NotFound { .. } | Self::UnknownFeature { .. } => {
                ErrorCategory::NotFound
            }
            Self::MalformedCatalog { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}
