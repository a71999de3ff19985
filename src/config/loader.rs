//! Settings discovery and manifest path resolution.

use crate::config::schema::Settings;
use crate::error::{BundleError, Result};
use crate::manifest::DEFAULT_MANIFEST;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file name, looked up in the project root.
pub const SETTINGS_FILE: &str = ".bundlecheck.yml";

/// Load project settings, falling back to defaults when the file is absent.
pub fn load_settings(project_root: &Path) -> Result<Settings> {
    let path = project_root.join(SETTINGS_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(BundleError::Io(e)),
    };

    parse_settings(&content, &path)
}

/// Parse YAML content into Settings.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| BundleError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Where the manifest lives and whether it must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLocation {
    pub path: PathBuf,
    /// Set when the path was named explicitly rather than defaulted.
    pub required: bool,
}

/// Pick the manifest path.
///
/// Precedence: the CLI/environment override, then the settings `file`,
/// then `Brewfile` in the project root. Relative paths are resolved
/// against the project root.
pub fn resolve_manifest(
    project_root: &Path,
    override_path: Option<&Path>,
    settings: &Settings,
) -> ManifestLocation {
    let (path, required) = match (override_path, &settings.file) {
        (Some(path), _) => (path.to_path_buf(), true),
        (None, Some(path)) => (path.clone(), true),
        (None, None) => (PathBuf::from(DEFAULT_MANIFEST), false),
    };

    let path = if path.is_absolute() {
        path
    } else {
        project_root.join(path)
    };
    ManifestLocation { path, required }
}
