//! Colors.

use console::Style;

/// Styles for report output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Category headers and fatal errors.
    pub error: Style,
    /// Verbose trace lines.
    pub dim: Style,
}

impl Theme {
    /// Red, bold headers.
    pub fn colored() -> Self {
        Self {
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// No styling (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick colored or plain depending on the terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Prefix an error line with its marker and apply the error style.
    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(format!("✗ {}", msg)).to_string()
    }
}

/// Colors are used on a terminal unless `NO_COLOR` is set (https://no-color.org/).
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::Term::stderr().is_term()
}
