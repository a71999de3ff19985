//! bundlecheck - Report drift between a Brewfile and the installed state.
//!
//! A manifest declares taps, packages, casks and App Store apps. The
//! checker compares it with what the package manager reports and lists
//! anything missing, grouped by kind.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project settings and manifest location
//! - [`drift`] - Phased drift evaluation and reporting
//! - [`error`] - Error types and result aliases
//! - [`inventory`] - Installed-state sources and the per-run snapshot
//! - [`manifest`] - Manifest parsing
//! - [`shell`] - External command execution
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use bundlecheck::drift::evaluate;
//! use bundlecheck::inventory::{Facet, InMemoryStateSource};
//! use bundlecheck::manifest::parse_manifest;
//! use std::path::Path;
//!
//! let entries = parse_manifest("brew \"git\"\ncask \"firefox\"", Path::new("Brewfile")).unwrap();
//! let source = InMemoryStateSource::new().with_facet(Facet::Packages, ["git"]);
//!
//! let report = evaluate(&entries, &source).unwrap();
//! assert_eq!(report.messages(), vec!["cask firefox missing"]);
//! ```

pub mod cli;
pub mod config;
pub mod drift;
pub mod error;
pub mod inventory;
pub mod manifest;
pub mod shell;
pub mod ui;

pub use error::{BundleError, Result};
