//! `repl`: one key sequence per line, one display per line

use crate::error::CliResult;
use crate::output::Reporter;
use crate::session::Session;
use keypad_calc::prelude::parse_sequence;
use std::io::{BufRead, Write};
use tracing::debug;

/// Lines that end the loop
const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

/// Prints the engine state as JSON instead of pressing keys
const STATE_COMMAND: &str = ":state";

/// Reads key sequences from `input` until EOF or a quit command.
///
/// The engine persists across lines. After each sequence the display is
/// written to `out`; a line that does not parse presses nothing and is
/// reported as a warning.
pub fn execute_repl<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    reporter: &Reporter,
    prompt: Option<&str>,
) -> CliResult<()> {
    let mut session = Session::new();
    write_prompt(out, prompt)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        if QUIT_COMMANDS.contains(&command) {
            debug!("quit requested");
            break;
        }

        if command == STATE_COMMAND {
            writeln!(out, "{}", serde_json::to_string(session.state())?)?;
        } else if !command.is_empty() {
            match parse_sequence(command) {
                Ok(keys) => {
                    session.replay(&keys);
                    for notification in session.take_notifications() {
                        reporter.notification(&notification);
                    }
                    writeln!(out, "{}", session.display())?;
                }
                Err(err) => reporter.warning(&format!("Invalid key sequence: {err}")),
            }
        }

        write_prompt(out, prompt)?;
    }

    Ok(())
}

fn write_prompt<W: Write>(out: &mut W, prompt: Option<&str>) -> CliResult<()> {
    if let Some(prompt) = prompt {
        write!(out, "{prompt}")?;
        out.flush()?;
    }
    Ok(())
}
