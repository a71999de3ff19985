//! Check phases and their ordering rules.

use crate::error::Result;
use crate::inventory::{Facet, Snapshot};
use crate::manifest::Entry;

use super::problem::Problem;

/// One step of the drift check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Taps,
    Packages,
    Casks,
    Apps,
    Services,
}

impl Phase {
    /// Phases in evaluation order.
    pub const ORDER: [Phase; 5] = [
        Phase::Taps,
        Phase::Packages,
        Phase::Casks,
        Phase::Apps,
        Phase::Services,
    ];

    /// Short name used in verbose output.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Taps => "taps",
            Phase::Packages => "packages",
            Phase::Casks => "casks",
            Phase::Apps => "App Store apps",
            Phase::Services => "services",
        }
    }

    /// Problems from this phase stop every later phase.
    ///
    /// An untapped repository makes every other answer about its packages
    /// unreliable, and missing packages make service checks meaningless.
    pub fn halts_on_problems(self) -> bool {
        matches!(self, Phase::Taps | Phase::Packages)
    }

    /// This phase only runs when no earlier phase found anything.
    pub fn requires_clean_report(self) -> bool {
        matches!(self, Phase::Services)
    }

    /// Run the phase against the declared entries.
    pub fn run(self, entries: &[Entry], snapshot: &mut Snapshot<'_>) -> Result<Vec<Problem>> {
        match self {
            Phase::Taps => missing_taps(entries, snapshot),
            Phase::Packages => missing_packages(entries, snapshot),
            Phase::Casks => missing_casks(entries, snapshot),
            Phase::Apps => missing_apps(entries, snapshot),
            Phase::Services => service_problems(entries, snapshot),
        }
    }
}

fn missing_taps(entries: &[Entry], snapshot: &mut Snapshot<'_>) -> Result<Vec<Problem>> {
    let mut problems = Vec::new();
    for entry in entries {
        if let Entry::Tap { name } = entry {
            if !snapshot.contains(Facet::Taps, name)? {
                problems.push(Problem::tap_missing(name));
            }
        }
    }
    Ok(problems)
}

fn missing_packages(entries: &[Entry], snapshot: &mut Snapshot<'_>) -> Result<Vec<Problem>> {
    let mut problems = Vec::new();
    for entry in entries {
        if let Entry::Package { name, .. } = entry {
            if !snapshot.contains(Facet::Packages, name)? {
                problems.push(Problem::package_missing(name));
            }
        }
    }
    Ok(problems)
}

fn missing_casks(entries: &[Entry], snapshot: &mut Snapshot<'_>) -> Result<Vec<Problem>> {
    let mut problems = Vec::new();
    for entry in entries {
        if let Entry::Cask { name } = entry {
            if !snapshot.contains(Facet::Casks, name)? {
                problems.push(Problem::cask_missing(name));
            }
        }
    }
    Ok(problems)
}

fn missing_apps(entries: &[Entry], snapshot: &mut Snapshot<'_>) -> Result<Vec<Problem>> {
    let mut problems = Vec::new();
    for entry in entries {
        if let Entry::App { name, id } = entry {
            if !snapshot.contains(Facet::Apps, &id.to_string())? {
                problems.push(Problem::app_missing(name, *id));
            }
        }
    }
    Ok(problems)
}

/// Started-service checks for packages that ask for one.
///
/// A stopped service is always a problem. A started one is a problem only
/// when `restart_service` is set and the package is upgradable; plain
/// `start_service` never looks at upgradability.
fn service_problems(entries: &[Entry], snapshot: &mut Snapshot<'_>) -> Result<Vec<Problem>> {
    let mut problems = Vec::new();
    for entry in entries {
        if !entry.wants_service() {
            continue;
        }
        let Entry::Package {
            name,
            restart_service,
            ..
        } = entry
        else {
            continue;
        };

        if !snapshot.contains(Facet::Services, name)? {
            problems.push(Problem::service_not_started(name));
        } else if *restart_service && snapshot.contains(Facet::Upgradable, name)? {
            problems.push(Problem::service_needs_restart(name));
        }
    }
    Ok(problems)
}
