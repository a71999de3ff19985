//! Project settings.
//!
//! Settings live in an optional `.bundlecheck.yml` in the project root:
//!
//! ```yaml
//! file: config/Brewfile        # manifest path (default: Brewfile)
//! brew_command: /opt/homebrew/bin/brew
//! mas_command: mas
//! output: quiet                # verbose, normal, quiet, silent
//! ```
//!
//! # Example
//!
//! ```
//! use bundlecheck::config::{load_settings, resolve_manifest};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".bundlecheck.yml"), "file: Brewfile.work").unwrap();
//!
//! let settings = load_settings(temp.path()).unwrap();
//! let location = resolve_manifest(temp.path(), None, &settings);
//! assert_eq!(location.path, temp.path().join("Brewfile.work"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    load_settings, parse_settings, resolve_manifest, ManifestLocation, SETTINGS_FILE,
};
pub use schema::Settings;
