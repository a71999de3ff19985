//! Output mode.

use serde::Deserialize;

/// How much the CLI prints besides the exit code.
///
/// Also accepted as `output:` in the settings file (lowercase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Spinner, report, and a trace of phases and queries on stderr.
    Verbose,
    /// Spinner and report.
    #[default]
    Normal,
    /// Report only.
    Quiet,
    /// Category headers and errors only.
    Silent,
}

impl OutputMode {
    /// Whether the spinner is drawn while the installed state is queried.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Whether the phase and query trace is printed.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Whether per-problem lines and listings reach stdout.
    pub fn shows_report(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
