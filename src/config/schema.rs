//! Settings file schema.

use serde::Deserialize;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Project settings read from `.bundlecheck.yml`.
///
/// Every field is optional; a missing file is the same as an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Manifest path, relative to the project root.
    pub file: Option<PathBuf>,

    /// Homebrew executable used for state queries.
    pub brew_command: String,

    /// `mas` executable used for App Store queries.
    pub mas_command: String,

    /// Default output mode when no CLI flag is given.
    pub output: Option<OutputMode>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: None,
            brew_command: "brew".to_string(),
            mas_command: "mas".to_string(),
            output: None,
        }
    }
}
