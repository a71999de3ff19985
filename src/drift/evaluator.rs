//! Drift evaluation.
//!
//! Runs the [`Phase`]s in order over one fresh [`Snapshot`] and collects
//! their problems into a [`ProblemReport`].

use crate::error::Result;
use crate::inventory::{Facet, Snapshot, StateSource};
use crate::manifest::Entry;

use super::phase::Phase;
use super::problem::ProblemReport;

/// What happened to one phase during an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// The phase ran and found this many problems.
    Ran { problems: usize },
    /// An earlier phase found drift, so this one did not run.
    Skipped,
}

/// A report plus a trace of how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub report: ProblemReport,
    /// Every phase, in evaluation order.
    pub phases: Vec<(Phase, PhaseOutcome)>,
    /// Facets queried from the source, in [`Facet::ALL`] order.
    pub queried: Vec<Facet>,
}

/// Compare declared entries against the installed state.
///
/// Tap and package problems stop evaluation. Cask and app phases always
/// run together once packages are clean. The service phase runs only when
/// nothing else was found. State query failures are returned as errors and
/// never appear in the report.
pub fn evaluate(entries: &[Entry], source: &dyn StateSource) -> Result<ProblemReport> {
    Ok(evaluate_traced(entries, source)?.report)
}

/// [`evaluate`], also recording which phases ran and which facets were read.
pub fn evaluate_traced(entries: &[Entry], source: &dyn StateSource) -> Result<Evaluation> {
    let mut snapshot = Snapshot::new(source);
    let mut report = ProblemReport::new();
    let mut phases = Vec::with_capacity(Phase::ORDER.len());
    let mut halted = false;

    for phase in Phase::ORDER {
        if halted || (phase.requires_clean_report() && report.has_problems()) {
            tracing::debug!("Skipping {:?} phase: earlier drift found", phase);
            phases.push((phase, PhaseOutcome::Skipped));
            continue;
        }

        let batch = phase.run(entries, &mut snapshot)?;
        tracing::debug!("{:?} phase found {} problem(s)", phase, batch.len());
        phases.push((phase, PhaseOutcome::Ran { problems: batch.len() }));

        halted = phase.halts_on_problems() && !batch.is_empty();
        report.extend(batch);
        if halted {
            tracing::debug!("Stopping after {:?} phase", phase);
        }
    }

    let fetched: Vec<Facet> = snapshot.fetched().collect();
    let queried = Facet::ALL
        .into_iter()
        .filter(|f| fetched.contains(f))
        .collect();

    Ok(Evaluation {
        report,
        phases,
        queried,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drift::{Category, Problem};
    use crate::inventory::{Facet, InMemoryStateSource};

    #[test]
    fn no_entries_no_problems() {
        let source = InMemoryStateSource::new();
        let report = evaluate(&[], &source).unwrap();

        assert!(!report.has_problems());
        assert!(source.fetches().is_empty());
    }

    #[test]
    fn satisfied_entries_no_problems() {
        let source = InMemoryStateSource::new()
            .with_facet(Facet::Taps, ["abc/def"])
            .with_facet(Facet::Packages, ["git"])
            .with_facet(Facet::Casks, ["firefox"])
            .with_apps([497799835]);
        let entries = vec![
            Entry::tap("abc/def"),
            Entry::package("git"),
            Entry::cask("firefox"),
            Entry::app("Xcode", 497799835),
        ];

        let report = evaluate(&entries, &source).unwrap();

        assert!(report.is_empty());
    }

    #[test]
    fn missing_tap_stops_everything_else() {
        let source = InMemoryStateSource::new();
        let entries = vec![
            Entry::tap("abc/def"),
            Entry::package("git"),
            Entry::cask("firefox"),
            Entry::app("Xcode", 497799835),
            Entry::package_started("redis"),
        ];

        let report = evaluate(&entries, &source).unwrap();

        assert_eq!(report.messages(), vec!["tap abc/def missing"]);
        assert_eq!(source.fetches(), vec![Facet::Taps]);
    }

    #[test]
    fn missing_package_stops_casks_apps_and_services() {
        let source = InMemoryStateSource::new().with_facet(Facet::Taps, ["abc/def"]);
        let entries = vec![
            Entry::tap("abc/def"),
            Entry::package_started("abc"),
            Entry::cask("firefox"),
            Entry::app("Xcode", 497799835),
        ];

        let report = evaluate(&entries, &source).unwrap();

        assert_eq!(report.messages(), vec!["package abc missing"]);
        assert_eq!(source.fetches(), vec![Facet::Taps, Facet::Packages]);
    }

    #[test]
    fn casks_and_apps_are_both_reported() {
        let source = InMemoryStateSource::new();
        let entries = vec![Entry::cask("abc"), Entry::app("Xcode", 497799835)];

        let report = evaluate(&entries, &source).unwrap();

        assert_eq!(report.count(Category::Cask), 1);
        assert_eq!(report.count(Category::App), 1);
    }

    #[test]
    fn cask_problem_skips_services() {
        let source = InMemoryStateSource::new().with_facet(Facet::Packages, ["redis"]);
        let entries = vec![Entry::package_started("redis"), Entry::cask("abc")];

        let report = evaluate(&entries, &source).unwrap();

        assert_eq!(report.messages(), vec!["cask abc missing"]);
        assert_eq!(source.fetch_count(Facet::Services), 0);
    }

    #[test]
    fn unflagged_packages_never_query_services() {
        let source = InMemoryStateSource::new().with_facet(Facet::Packages, ["abc"]);
        let entries = vec![Entry::package("abc")];

        let report = evaluate(&entries, &source).unwrap();

        assert!(report.is_empty());
        assert_eq!(source.fetch_count(Facet::Services), 0);
        assert_eq!(source.fetch_count(Facet::Upgradable), 0);
    }

    #[test]
    fn unstarted_service_is_reported() {
        let source = InMemoryStateSource::new()
            .with_facet(Facet::Packages, ["abc", "def"])
            .with_facet(Facet::Services, ["abc"]);
        let entries = vec![Entry::package_started("abc"), Entry::package_started("def")];

        let report = evaluate(&entries, &source).unwrap();

        assert_eq!(report.problems(), &[Problem::service_not_started("def")]);
    }

    #[test]
    fn restart_flag_reports_outdated_running_service() {
        let source = InMemoryStateSource::new()
            .with_facet(Facet::Packages, ["abc"])
            .with_facet(Facet::Services, ["abc"])
            .with_facet(Facet::Upgradable, ["abc"]);
        let entries = vec![Entry::package_restarted("abc")];

        let report = evaluate(&entries, &source).unwrap();

        assert_eq!(report.problems(), &[Problem::service_needs_restart("abc")]);
    }

    #[test]
    fn start_flag_ignores_outdated_running_service() {
        let source = InMemoryStateSource::new()
            .with_facet(Facet::Packages, ["abc"])
            .with_facet(Facet::Services, ["abc"])
            .with_facet(Facet::Upgradable, ["abc"]);
        let entries = vec![Entry::package_started("abc")];

        let report = evaluate(&entries, &source).unwrap();

        assert!(report.is_empty());
        assert_eq!(source.fetch_count(Facet::Upgradable), 0);
    }

    #[test]
    fn each_facet_fetched_at_most_once() {
        let source = InMemoryStateSource::new()
            .with_facet(Facet::Taps, ["a/b", "c/d"])
            .with_facet(Facet::Packages, ["x", "y", "z"])
            .with_facet(Facet::Services, ["x", "y"])
            .with_facet(Facet::Upgradable, ["y"]);
        let entries = vec![
            Entry::tap("a/b"),
            Entry::tap("c/d"),
            Entry::package_restarted("x"),
            Entry::package_restarted("y"),
            Entry::package_started("z"),
        ];

        let report = evaluate(&entries, &source).unwrap();

        assert_eq!(
            report.messages(),
            vec![
                "y service needs restart (package is outdated)",
                "z service not started"
            ]
        );
        for facet in Facet::ALL {
            assert!(source.fetch_count(facet) <= 1, "{} fetched twice", facet);
        }
    }

    #[test]
    fn qualified_names_match_installed_short_names() {
        let source = InMemoryStateSource::new()
            .with_facet(Facet::Taps, ["user/tap", "homebrew/cask-fonts"])
            .with_facet(Facet::Packages, ["foo"])
            .with_facet(Facet::Casks, ["font-fira-code"]);
        let entries = vec![
            Entry::tap("user/tap"),
            Entry::tap("homebrew/cask-fonts"),
            Entry::package("user/tap/foo"),
            Entry::cask("homebrew/cask-fonts/font-fira-code"),
        ];

        let report = evaluate(&entries, &source).unwrap();
        assert!(!report.has_problems(), "{:?}", report.messages());
    }

    #[test]
    fn trace_marks_halted_phases_skipped() {
        let source = InMemoryStateSource::new();
        let entries = vec![Entry::tap("a/b"), Entry::cask("abc")];

        let evaluation = evaluate_traced(&entries, &source).unwrap();

        assert_eq!(
            evaluation.phases,
            vec![
                (Phase::Taps, PhaseOutcome::Ran { problems: 1 }),
                (Phase::Packages, PhaseOutcome::Skipped),
                (Phase::Casks, PhaseOutcome::Skipped),
                (Phase::Apps, PhaseOutcome::Skipped),
                (Phase::Services, PhaseOutcome::Skipped),
            ]
        );
        assert_eq!(evaluation.queried, vec![Facet::Taps]);
    }

    #[test]
    fn trace_lists_queried_facets_in_order() {
        let source = InMemoryStateSource::new()
            .with_facet(Facet::Packages, ["redis"])
            .with_facet(Facet::Services, ["redis"]);
        let entries = vec![Entry::package_restarted("redis")];

        let evaluation = evaluate_traced(&entries, &source).unwrap();

        assert!(!evaluation.report.has_problems());
        assert_eq!(
            evaluation.queried,
            vec![Facet::Packages, Facet::Upgradable, Facet::Services]
        );
        assert_eq!(
            evaluation.phases.last(),
            Some(&(Phase::Services, PhaseOutcome::Ran { problems: 0 }))
        );
    }

    #[test]
    fn state_failure_is_an_error() {
        let source = InMemoryStateSource::new().failing(Facet::Casks);
        let entries = vec![Entry::cask("abc")];

        assert!(evaluate(&entries, &source).is_err());
    }
}
