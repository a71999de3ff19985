//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use bundlecheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.error("Casks need to be installed:");
//! ui.message("  → cask abc missing");
//!
//! // Assert on captured interactions
//! assert!(ui.has_error("Casks"));
//! assert!(ui.has_message("cask abc missing"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    errors: Vec<String>,
    details: Vec<String>,
    spinners: Vec<String>,
    spinner_states: Vec<Rc<RefCell<MockSpinnerState>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Report lines, regardless of output mode.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Headers and errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Trace lines that the current mode would print.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Messages of every spinner that was started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// How each started spinner ended, in start order.
    pub fn spinner_statuses(&self) -> Vec<Option<SpinnerStatus>> {
        self.spinner_states
            .iter()
            .map(|s| s.borrow().status)
            .collect()
    }

    /// Check if a report line contains `msg`.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a header or error contains `msg`.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Whether nothing at all was written.
    pub fn is_silent(&self) -> bool {
        self.messages.is_empty() && self.errors.is_empty() && self.details.is_empty()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            self.details.push(msg.to_string());
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        let spinner = MockSpinner::new();
        self.spinner_states.push(Rc::clone(&spinner.state));
        Box::new(spinner)
    }
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished with error.
    Error,
    /// Cleared without output.
    Cleared,
}

#[derive(Debug, Default)]
struct MockSpinnerState {
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// Mock spinner that records how it finished.
#[derive(Debug, Default)]
pub struct MockSpinner {
    state: Rc<RefCell<MockSpinnerState>>,
}

impl MockSpinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message passed to `finish_error`, if any.
    pub fn finish_message(&self) -> Option<String> {
        self.state.borrow().finish_message.clone()
    }

    pub fn status(&self) -> Option<SpinnerStatus> {
        self.state.borrow().status
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_error(&mut self, msg: &str) {
        let mut state = self.state.borrow_mut();
        state.finish_message = Some(msg.to_string());
        state.status = Some(SpinnerStatus::Error);
    }

    fn finish_clear(&mut self) {
        self.state.borrow_mut().status = Some(SpinnerStatus::Cleared);
    }
}
