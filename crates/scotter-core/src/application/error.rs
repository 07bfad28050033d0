//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A provider registry lock was poisoned by a panicking writer.
    #[error("Provider registry is unavailable (lock poisoned)")]
    RegistryLock,

    /// Store access failed (lock poisoned, etc.).
    #[error("Storage lock poisoned")]
    StoreLockError,

    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    #[error("No project configuration found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Could not parse {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// Project already initialized at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    #[error("Provider '{provider}' failed to generate files: {reason}")]
    GenerationFailed { provider: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::RegistryLock | Self::StoreLockError => vec![
                "An internal lock was poisoned by an earlier failure".into(),
                "Try again".into(),
            ],
            Self::ConfigNotFound { path } => vec![
                format!("Expected a project file at {}", path.display()),
                "Run: scotter init <name> to create a project".into(),
                "Or point at an existing project with --project <dir>".into(),
            ],
            Self::ConfigParse { path, .. } => vec![
                format!("Fix the YAML syntax in {}", path.display()),
                "Or re-create it with: scotter init --force".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Already initialized: {}", path.display()),
                "Use --force to overwrite the project configuration".into(),
                "Choose a different project name".into(),
            ],
            Self::GenerationFailed { provider, .. } => vec![
                format!("The {} provider could not write its files", provider),
                "Re-run with -v for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::GenerationFailed { .. } => {
                ErrorCategory::Internal
            }
            Self::RegistryLock | Self::StoreLockError => ErrorCategory::Internal,
            Self::ConfigNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigParse { .. } => ErrorCategory::Configuration,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
        }
    }
}
