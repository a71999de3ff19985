//! Live state source backed by the `brew` and `mas` command-line tools.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{BundleError, Result};
use crate::shell::{execute, CommandOptions, CommandResult};

use super::source::{Facet, StateSource};

/// Leading numeric id in a `mas list` line.
static MAS_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s").expect("MAS_ID_REGEX must compile"));

/// Queries Homebrew and `mas` for the installed state.
#[derive(Debug, Clone)]
pub struct BrewStateSource {
    brew: String,
    mas: String,
    options: CommandOptions,
}

impl BrewStateSource {
    /// Create a source using the given `brew` and `mas` executables.
    pub fn new(brew: impl Into<String>, mas: impl Into<String>) -> Self {
        let mut options = CommandOptions::default();
        // Queries must not trigger an update or print hints.
        options
            .env
            .insert("HOMEBREW_NO_AUTO_UPDATE".to_string(), "1".to_string());
        options
            .env
            .insert("HOMEBREW_NO_ENV_HINTS".to_string(), "1".to_string());

        Self {
            brew: brew.into(),
            mas: mas.into(),
            options,
        }
    }

    /// The program and arguments used for a facet.
    pub fn command_for(&self, facet: Facet) -> (&str, &'static [&'static str]) {
        let args: &'static [&'static str] = match facet {
            Facet::Taps => &["tap"],
            Facet::Packages => &["list", "--formula", "-1"],
            Facet::Casks => &["list", "--cask", "-1"],
            Facet::Upgradable => &["outdated", "--formula", "--quiet"],
            Facet::Services => &["services", "list"],
            Facet::Apps => &["list"],
        };
        let program = match facet {
            Facet::Apps => self.mas.as_str(),
            _ => self.brew.as_str(),
        };
        (program, args)
    }

    fn run(&self, facet: Facet) -> Result<CommandResult> {
        let (program, args) = self.command_for(facet);
        let result = execute(program, args, &self.options).map_err(|e| {
            BundleError::StateQueryFailed {
                facet,
                message: e.to_string(),
            }
        })?;

        if !result.success {
            let stderr = result.stderr.trim();
            return Err(BundleError::StateQueryFailed {
                facet,
                message: if stderr.is_empty() {
                    format!("`{} {}` exited with {:?}", program, args.join(" "), result.exit_code)
                } else {
                    stderr.to_string()
                },
            });
        }
        Ok(result)
    }
}

impl Default for BrewStateSource {
    fn default() -> Self {
        Self::new("brew", "mas")
    }
}

impl StateSource for BrewStateSource {
    fn fetch(&self, facet: Facet) -> Result<Vec<String>> {
        let result = self.run(facet)?;
        Ok(match facet {
            Facet::Services => parse_started_services(&result.stdout),
            Facet::Apps => parse_mas_ids(&result.stdout),
            _ => result
                .stdout_lines()
                .map(|l| l.trim().to_string())
                .collect(),
        })
    }
}

/// Names of services whose status column reads `started`.
///
/// ```text
/// Name       Status  User File
/// postgresql started me   ~/Library/LaunchAgents/homebrew.mxcl.postgresql.plist
/// redis      none
/// ```
pub fn parse_started_services(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let mut columns = line.split_whitespace();
            let name = columns.next()?;
            let status = columns.next()?;
            (status == "started").then(|| name.to_string())
        })
        .collect()
}

/// App ids from `mas list` output (`497799835  Xcode  (15.0)`).
pub fn parse_mas_ids(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| MAS_ID_REGEX.captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}
