//! `run`: press a key sequence and print the display

use crate::commands::RunArgs;
use crate::error::CliResult;
use crate::output::{render_step, OutputFormat, Reporter};
use crate::session::Session;
use keypad_calc::prelude::parse_sequence;
use std::io::Write;
use tracing::debug;

/// Replays `args.keys` on a fresh engine and writes the result to `out`.
///
/// Notifications go to the reporter. With `--strict`, the first engine error
/// becomes the command's error after the output has been written.
pub fn execute_run<W: Write>(args: &RunArgs, reporter: &Reporter, out: &mut W) -> CliResult<()> {
    let sequence = args.sequence();
    let keys = parse_sequence(&sequence)?;
    debug!(keys = keys.len(), %sequence, "replaying");

    let mut session = Session::new();
    let steps = session.replay(&keys);

    match OutputFormat::from(args.format) {
        OutputFormat::Text => {
            for step in &steps {
                if args.trace {
                    writeln!(out, "{}", render_step(step))?;
                }
                if let Some(error) = &step.error {
                    reporter.notification(error);
                }
            }
            writeln!(out, "{}", session.display())?;
        }
        OutputFormat::Json => {
            let transcript = session.transcript(steps);
            serde_json::to_writer_pretty(&mut *out, &transcript)?;
            writeln!(out)?;
        }
    }

    match session.first_error() {
        Some(err) if args.strict => Err(err.clone().into()),
        _ => Ok(()),
    }
}
