//! Settings derived from the global flags: log level and notification styling

use serde::{Deserialize, Serialize};

/// How much the CLI logs to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// `-q`: engine notifications only, logging off
    Quiet,
    /// No flag: errors logged
    #[default]
    Normal,
    /// `-v`: each notification also logged
    Verbose,
    /// `-vv`: each evaluation logged
    Debug,
    /// `-vvv`: each key press logged
    Trace,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// True when warnings and info lines are suppressed
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// True when tracing targets should be shown in log lines
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug | Self::Trace)
    }

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[must_use]
    pub const fn log_directive(self) -> &'static str {
        match self {
            Self::Quiet => "off",
            Self::Normal => "error",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Whether notification prefixes are styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Style even when piped
    Always,
    /// Style only when stderr is a terminal
    #[default]
    Auto,
    /// Plain `ERROR`/`WARN`/`INFO` prefixes
    Never,
}

impl ColorChoice {
    /// Resolves `Auto` against the stderr stream
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stderr_is_terminal(),
        }
    }
}

/// Notifications go to stderr, so that is the stream that decides
fn stderr_is_terminal() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Resolved settings shared by every subcommand
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log level
    pub verbosity: Verbosity,
    /// Styling of notifications
    pub color: ColorChoice,
}

impl CliConfig {
    /// Default settings: errors logged, auto styling
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the log level
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Replaces the styling choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Whether notifications should be styled
    #[must_use]
    pub fn use_color(&self) -> bool {
        self.color.should_color()
    }
}
