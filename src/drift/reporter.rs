//! Report rendering and exit status.

use crate::ui::UserInterface;

use super::problem::ProblemReport;

/// Exit code for a report with drift.
pub const DRIFT_EXIT_CODE: i32 = 1;

/// Exit code for a report: 0 when clean, [`DRIFT_EXIT_CODE`] otherwise.
pub fn exit_code(report: &ProblemReport) -> i32 {
    if report.has_problems() {
        DRIFT_EXIT_CODE
    } else {
        0
    }
}

/// Print a report grouped by category and return its exit code.
///
/// A clean report prints nothing.
pub fn report(report: &ProblemReport, ui: &mut dyn UserInterface) -> i32 {
    for (category, problems) in report.grouped() {
        ui.error(category.header());
        for problem in problems {
            ui.message(&format!("  → {}", problem.message));
        }
    }
    exit_code(report)
}
