//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// bundlecheck - Check a Brewfile against what is installed.
#[derive(Debug, Parser)]
#[command(name = "bundlecheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the manifest (overrides settings and ./Brewfile)
    #[arg(short, long, global = true, env = "HOMEBREW_BUNDLE_FILE")]
    pub file: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that everything in the manifest is installed (default)
    Check,

    /// List entries declared in the manifest
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// List taps
    #[arg(long)]
    pub taps: bool,

    /// List packages (the default when no filter is given)
    #[arg(long)]
    pub packages: bool,

    /// List casks
    #[arg(long)]
    pub casks: bool,

    /// List App Store apps
    #[arg(long)]
    pub apps: bool,

    /// List every entry
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["bundlecheck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_subcommand_parses() {
        let cli = Cli::try_parse_from(["bundlecheck", "check"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn file_is_global() {
        let cli =
            Cli::try_parse_from(["bundlecheck", "check", "--file", "/tmp/Brewfile"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/Brewfile")));
    }

    #[test]
    fn list_filters_parse() {
        let cli = Cli::try_parse_from(["bundlecheck", "list", "--casks", "--apps"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert!(args.casks);
                assert!(args.apps);
                assert!(!args.taps);
            }
            other => panic!("Expected list, got {:?}", other),
        }
    }
}
