//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// keypad-calc: press calculator buttons from the terminal
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no logs; notifications are still shown)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", env = "KEYPAD_CALC_COLOR", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keys and print the display
    ///
    /// Keys are button labels: digits, `.`, `+ - * /` (`x` and `X` also
    /// multiply), `=`, `%`, `<` or `DEL` for delete, `C` or `AC` for clear.
    /// Example: keypad-calc run "2+3=="
    Run(RunArgs),

    /// Read key sequences from stdin, one line at a time
    Repl(ReplArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Key sequence; several arguments are joined with spaces
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(short, long)]
    pub trace: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,

    /// Exit with an error if the engine reports one
    #[arg(long)]
    pub strict: bool,
}

impl RunArgs {
    /// The key arguments as one sequence
    #[must_use]
    pub fn sequence(&self) -> String {
        self.keys.join(" ")
    }
}

/// Arguments for the repl command
#[derive(Parser, Debug, Default)]
pub struct ReplArgs {
    /// Never print a prompt, even on a terminal
    #[arg(long)]
    pub no_prompt: bool,

    /// Prompt printed before each line on a terminal
    #[arg(long, default_value = "> ")]
    pub prompt: String,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON transcript
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
