//! Drift detection between a manifest and the installed state.
//!
//! # Modules
//!
//! - [`problem`] - `Problem`, `Category` and the aggregated `ProblemReport`
//! - [`phase`] - The ordered check phases and their short-circuit rules
//! - [`evaluator`] - Runs the phases over a lazily fetched snapshot
//! - [`reporter`] - Prints a report and maps it to an exit code
//!
//! # Example
//!
//! ```
//! use bundlecheck::drift::{evaluate, exit_code};
//! use bundlecheck::inventory::InMemoryStateSource;
//! use bundlecheck::manifest::Entry;
//!
//! let source = InMemoryStateSource::new();
//! let report = evaluate(&[Entry::cask("abc")], &source).unwrap();
//! assert_eq!(report.messages(), vec!["cask abc missing"]);
//! assert_eq!(exit_code(&report), 1);
//! ```

pub mod evaluator;
pub mod phase;
pub mod problem;
pub mod reporter;

pub use evaluator::{evaluate, evaluate_traced, Evaluation, PhaseOutcome};
pub use phase::Phase;
pub use problem::{Category, Problem, ProblemReport};
pub use reporter::{exit_code, report, DRIFT_EXIT_CODE};
