//! Error types for bundlecheck operations.
//!
//! This module defines [`BundleError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Drift (a missing tap, package, cask, app or service) is never an error;
//!   it is collected into a [`ProblemReport`](crate::drift::ProblemReport)
//! - Use `BundleError` for failures that stop a run before a report exists

use std::path::PathBuf;
use thiserror::Error;

use crate::inventory::Facet;

/// Core error type for bundlecheck operations.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Failed to parse the settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Manifest path was given explicitly but does not exist.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// A manifest line could not be understood.
    #[error("{path}:{line}: {message}")]
    ManifestParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Querying the installed state failed.
    #[error("Could not read {facet}: {message}")]
    StateQueryFailed { facet: Facet, message: String },

    /// Shell command could not be spawned or failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bundlecheck operations.
pub type Result<T> = std::result::Result<T, BundleError>;
