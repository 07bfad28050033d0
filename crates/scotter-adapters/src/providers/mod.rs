//! Built-in language and CI providers.

pub mod github;
pub mod golang;

use std::path::Path;

use scotter_core::{application::ports::Filesystem, error::ScotterResult};

pub use github::GitHubActionsProvider;
pub use golang::GoLanguageProvider;

/// Write `content` to `path`, creating the parent directory first.
pub(crate) fn write_file(fs: &dyn Filesystem, path: &Path, content: &str) -> ScotterResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs.create_dir_all(parent)?;
        }
    }
    fs.write_file(path, content)
}
