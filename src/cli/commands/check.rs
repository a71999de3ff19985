//! Check command implementation.
//!
//! The `bundlecheck check` command compares the manifest with what is
//! installed, prints anything missing grouped by kind, and exits non-zero
//! when the machine has drifted.

use std::path::{Path, PathBuf};

use crate::config::{load_settings, resolve_manifest};
use crate::drift::{evaluate_traced, report, Evaluation, PhaseOutcome};
use crate::error::{BundleError, Result};
use crate::inventory::{BrewStateSource, StateSource};
use crate::manifest::load_manifest;
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    manifest: Option<PathBuf>,
    source: Option<Box<dyn StateSource>>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, manifest: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manifest: manifest.map(Path::to_path_buf),
            source: None,
        }
    }

    /// Use a specific state source instead of the configured executables.
    pub fn with_source(mut self, source: Box<dyn StateSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_settings(&self.project_root)?;

        // Apply settings output when no CLI flag was explicitly set
        if ui.output_mode() == OutputMode::Normal {
            if let Some(mode) = settings.output {
                ui.set_output_mode(mode);
            }
        }

        let location = resolve_manifest(&self.project_root, self.manifest.as_deref(), &settings);
        let entries = load_manifest(&location.path, location.required)?;
        tracing::debug!(
            "Checking {} entries from {}",
            entries.len(),
            location.path.display()
        );
        ui.detail(&format!(
            "Read {} entries from {}",
            entries.len(),
            location.path.display()
        ));

        let brew;
        let source: &dyn StateSource = match &self.source {
            Some(source) => source.as_ref(),
            None => {
                brew = BrewStateSource::new(&settings.brew_command, &settings.mas_command);
                &brew
            }
        };

        let mut spinner = (!entries.is_empty()).then(|| ui.start_spinner("Checking bundle..."));
        let outcome = evaluate_traced(&entries, source);
        if let Some(spinner) = spinner.as_mut() {
            match &outcome {
                Err(BundleError::StateQueryFailed { facet, .. }) => {
                    spinner.finish_error(&format!("Could not read {}", facet.label()));
                }
                Err(_) => spinner.finish_error("Check failed"),
                Ok(_) => spinner.finish_clear(),
            }
        }
        let evaluation = outcome?;
        show_trace(&evaluation, ui);

        Ok(CommandResult::from_exit_code(report(&evaluation.report, ui)))
    }
}

/// Verbose trace: one line per phase, then the facets that were queried.
fn show_trace(evaluation: &Evaluation, ui: &mut dyn UserInterface) {
    for (phase, outcome) in &evaluation.phases {
        let line = match outcome {
            PhaseOutcome::Ran { problems: 0 } => format!("Checked {}: ok", phase.label()),
            PhaseOutcome::Ran { problems } => {
                format!("Checked {}: {} problem(s)", phase.label(), problems)
            }
            PhaseOutcome::Skipped => format!("Skipped {}", phase.label()),
        };
        ui.detail(&line);
    }

    if evaluation.queried.is_empty() {
        ui.detail("Queried nothing");
    } else {
        let facets: Vec<String> = evaluation.queried.iter().map(|f| f.to_string()).collect();
        ui.detail(&format!("Queried {}", facets.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Facet, InMemoryStateSource};
    use crate::ui::{MockUI, SpinnerStatus};
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(manifest: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Brewfile"), manifest).unwrap();
        temp
    }

    fn run(temp: &TempDir, source: InMemoryStateSource) -> (CommandResult, MockUI) {
        let cmd = CheckCommand::new(temp.path(), None).with_source(Box::new(source));
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn check_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), None);
        assert_eq!(cmd.project_root(), temp.path());
    }

    #[test]
    fn missing_default_manifest_is_clean() {
        let temp = TempDir::new().unwrap();
        let (result, ui) = run(&temp, InMemoryStateSource::new());

        assert!(result.success);
        assert!(ui.is_silent());
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn empty_manifest_is_silent_success() {
        let temp = setup_project("");
        let (result, ui) = run(&temp, InMemoryStateSource::new());

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.is_silent());
    }

    #[test]
    fn satisfied_manifest_prints_nothing() {
        let temp = setup_project("tap \"abc/def\"\nbrew \"abc\"\ncask \"firefox\"\n");
        let source = InMemoryStateSource::new()
            .with_facet(Facet::Taps, ["abc/def"])
            .with_facet(Facet::Packages, ["abc"])
            .with_facet(Facet::Casks, ["firefox"]);
        let (result, ui) = run(&temp, source);

        assert!(result.success);
        assert!(ui.is_silent());
        assert_eq!(ui.spinner_statuses(), vec![Some(SpinnerStatus::Cleared)]);
    }

    #[test]
    fn missing_cask_fails_with_grouped_output() {
        let temp = setup_project("cask \"abc\"\n");
        let (result, ui) = run(&temp, InMemoryStateSource::new());

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors(), &["Casks need to be installed:".to_string()]);
        assert_eq!(ui.messages(), &["  → cask abc missing".to_string()]);
    }

    #[test]
    fn missing_tap_hides_later_problems() {
        let temp = setup_project("tap \"abc/def\"\nbrew \"abc\"\ncask \"xyz\"\n");
        let (result, ui) = run(&temp, InMemoryStateSource::new());

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.messages(), &["  → tap abc/def missing".to_string()]);
    }

    #[test]
    fn service_not_started_is_reported() {
        let temp = setup_project("brew \"abc\", start_service: true\n");
        let source = InMemoryStateSource::new().with_facet(Facet::Packages, ["abc"]);
        let (result, ui) = run(&temp, source);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Services need to be started"));
        assert!(ui.has_message("abc service not started"));
    }

    #[test]
    fn restart_service_on_outdated_package_is_reported() {
        let temp = setup_project("brew \"abc\", restart_service: true\n");
        let source = InMemoryStateSource::new()
            .with_facet(Facet::Packages, ["abc"])
            .with_facet(Facet::Services, ["abc"])
            .with_facet(Facet::Upgradable, ["abc"]);
        let (result, ui) = run(&temp, source);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("abc service needs restart"));
    }

    #[test]
    fn start_service_ignores_outdated_package() {
        let temp = setup_project("brew \"abc\", start_service: true\n");
        let source = InMemoryStateSource::new()
            .with_facet(Facet::Packages, ["abc"])
            .with_facet(Facet::Services, ["abc"])
            .with_facet(Facet::Upgradable, ["abc"]);
        let (result, ui) = run(&temp, source);

        assert!(result.success);
        assert!(ui.is_silent());
    }

    #[test]
    fn verbose_mode_traces_phases_and_queries() {
        let temp = setup_project("tap \"abc/def\"\ncask \"xyz\"\n");
        let cmd = CheckCommand::new(temp.path(), None)
            .with_source(Box::new(InMemoryStateSource::new()));
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        let details = ui.details();
        assert!(details[0].starts_with("Read 2 entries from"));
        assert_eq!(
            &details[1..],
            &[
                "Checked taps: 1 problem(s)".to_string(),
                "Skipped packages".to_string(),
                "Skipped casks".to_string(),
                "Skipped App Store apps".to_string(),
                "Skipped services".to_string(),
                "Queried tapped repositories".to_string(),
            ]
        );
    }

    #[test]
    fn normal_mode_prints_no_trace() {
        let temp = setup_project("cask \"xyz\"\n");
        let (_, ui) = run(&temp, InMemoryStateSource::new());
        assert!(ui.details().is_empty());
    }

    #[test]
    fn state_failure_is_an_error() {
        let temp = setup_project("cask \"abc\"\n");
        let cmd = CheckCommand::new(temp.path(), None)
            .with_source(Box::new(InMemoryStateSource::new().failing(Facet::Casks)));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(
            err,
            BundleError::StateQueryFailed {
                facet: Facet::Casks,
                ..
            }
        ));
        assert_eq!(ui.spinner_statuses(), vec![Some(SpinnerStatus::Error)]);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn explicit_missing_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("Nope.Brewfile");
        let cmd = CheckCommand::new(temp.path(), Some(&missing))
            .with_source(Box::new(InMemoryStateSource::new()));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, BundleError::ManifestNotFound { .. }));
    }

    #[test]
    fn settings_choose_manifest_and_output() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".bundlecheck.yml"),
            "file: Brewfile.work\noutput: quiet\n",
        )
        .unwrap();
        fs::write(temp.path().join("Brewfile.work"), "cask \"abc\"\n").unwrap();

        let cmd = CheckCommand::new(temp.path(), None)
            .with_source(Box::new(InMemoryStateSource::new()));
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert!(ui.has_message("cask abc missing"));
    }

    #[test]
    fn cli_output_flag_beats_settings() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".bundlecheck.yml"), "output: silent\n").unwrap();

        let cmd = CheckCommand::new(temp.path(), None)
            .with_source(Box::new(InMemoryStateSource::new()));
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let temp = setup_project("brew \"abc\"\nnonsense \"x\"\n");
        let cmd = CheckCommand::new(temp.path(), None)
            .with_source(Box::new(InMemoryStateSource::new()));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        match err {
            BundleError::ManifestParse { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected ManifestParse, got {:?}", other),
        }
    }
}
