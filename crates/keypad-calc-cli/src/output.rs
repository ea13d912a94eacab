//! Output formatting and notification reporting

use crate::session::Step;
use console::{style, Color, Term};
use serde::{Deserialize, Serialize};

/// Output format for run results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON transcript
    Json,
}

/// Writes notifications and diagnostics to stderr
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Show an engine notification
    pub fn notification(&self, message: &str) {
        // Notifications are the engine's only error channel, so quiet keeps them
        let _ = self.term.write_line(&self.prefixed("✗", "ERROR", Color::Red, message));
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(&self.prefixed("⚠", "WARN", Color::Yellow, message));
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(&self.prefixed("ℹ", "INFO", Color::Blue, message));
    }

    fn prefixed(&self, symbol: &str, plain: &str, color: Color, message: &str) -> String {
        let prefix = if self.use_color {
            style(symbol).fg(color).bold().to_string()
        } else {
            plain.to_string()
        };
        format!("{prefix} {message}")
    }
}

/// One line of `--trace` output: the key, the display, and any notification
#[must_use]
pub fn render_step(step: &Step) -> String {
    let line = format!("{:>3}  {}", step.key, step.display);
    match &step.error {
        Some(error) => format!("{line}  ({error})"),
        None => line,
    }
}
