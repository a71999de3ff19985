//! Bundle manifest loading.
//!
//! A manifest declares the taps, packages, casks and App Store apps a
//! machine is expected to have. This module reads it from disk and turns
//! it into a list of [`Entry`] values.
//!
//! # Example
//!
//! ```
//! use bundlecheck::manifest::{parse_manifest, Entry};
//! use std::path::Path;
//!
//! let entries = parse_manifest("brew \"redis\", start_service: true", Path::new("Brewfile")).unwrap();
//! assert_eq!(entries, vec![Entry::package_started("redis")]);
//! ```

pub mod entry;
pub mod parser;

pub use entry::{Entry, EntryKind};
pub use parser::parse_manifest;

use std::fs;
use std::path::Path;

use crate::error::{BundleError, Result};

/// Default manifest file name, looked up in the project root.
pub const DEFAULT_MANIFEST: &str = "Brewfile";

/// Load and parse a manifest file.
///
/// A missing file yields no entries unless `required` is set, in which
/// case it is an error. `required` is meant for paths the user named
/// explicitly.
pub fn load_manifest(path: &Path, required: bool) -> Result<Vec<Entry>> {
    if !path.exists() {
        if required {
            return Err(BundleError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!("No manifest at {}, nothing to check", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let entries = parse_manifest(&content, path)?;
    tracing::debug!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_optional_manifest_is_empty() {
        let temp = TempDir::new().unwrap();
        let entries = load_manifest(&temp.path().join(DEFAULT_MANIFEST), false).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn missing_required_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = load_manifest(&temp.path().join("Custom.Brewfile"), true).unwrap_err();
        assert!(matches!(err, BundleError::ManifestNotFound { .. }));
    }

    #[test]
    fn loads_entries_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_MANIFEST);
        fs::write(&path, "tap \"abc/def\"\ncask \"abc\"\n").unwrap();

        let entries = load_manifest(&path, true).unwrap();
        assert_eq!(entries, vec![Entry::tap("abc/def"), Entry::cask("abc")]);
    }

    #[test]
    fn empty_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_MANIFEST);
        fs::write(&path, "").unwrap();

        assert!(load_manifest(&path, true).unwrap().is_empty());
    }
}
