//! List command implementation.
//!
//! The `bundlecheck list` command prints the names declared in the
//! manifest, one per line, in manifest order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::config::{load_settings, resolve_manifest};
use crate::error::Result;
use crate::manifest::{load_manifest, EntryKind};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    manifest: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, manifest: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manifest: manifest.map(Path::to_path_buf),
            args,
        }
    }

    /// Entry kinds selected by the flags. Packages when nothing is selected.
    pub fn selected_kinds(&self) -> HashSet<EntryKind> {
        let args = &self.args;
        if args.all {
            return [
                EntryKind::Tap,
                EntryKind::Package,
                EntryKind::Cask,
                EntryKind::App,
            ]
            .into_iter()
            .collect();
        }

        let mut kinds = HashSet::new();
        if args.taps {
            kinds.insert(EntryKind::Tap);
        }
        if args.packages {
            kinds.insert(EntryKind::Package);
        }
        if args.casks {
            kinds.insert(EntryKind::Cask);
        }
        if args.apps {
            kinds.insert(EntryKind::App);
        }
        if kinds.is_empty() {
            kinds.insert(EntryKind::Package);
        }
        kinds
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_settings(&self.project_root)?;
        let location = resolve_manifest(&self.project_root, self.manifest.as_deref(), &settings);
        let entries = load_manifest(&location.path, location.required)?;

        let kinds = self.selected_kinds();
        for entry in entries.iter().filter(|e| kinds.contains(&e.kind())) {
            ui.message(entry.name());
        }

        Ok(CommandResult::success())
    }
}
