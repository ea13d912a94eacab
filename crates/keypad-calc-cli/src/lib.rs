//! keypad-calc CLI library
//!
//! Terminal front end for the keypad engine: `run` replays a key sequence
//! and prints the display, `repl` reads sequences line by line.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;
pub mod session;

pub use commands::{Cli, ColorArg, Commands, FormatArg, ReplArgs, RunArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_step, OutputFormat, Reporter};
pub use session::{Session, Step, Transcript};
