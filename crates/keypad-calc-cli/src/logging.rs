//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout carries only the display. `RUST_LOG`
//! overrides the level chosen by `-q`/`-v`.

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter for `verbosity`, preferring `RUST_LOG` when set
#[must_use]
pub fn filter_for(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Installs the global subscriber
pub fn init(verbosity: Verbosity) -> CliResult<()> {
    tracing_subscriber::registry()
        .with(filter_for(verbosity))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity.is_verbose()),
        )
        .try_init()
        .map_err(|err| CliError::logging(err.to_string()))
}
