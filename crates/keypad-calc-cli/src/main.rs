//! keypad-calc: drive the keypad calculator from the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc run "2+3=="           # prints 10
//! keypad-calc run --trace "12<3"    # display after every key
//! keypad-calc run -f json "5/0="    # JSON transcript
//! keypad-calc repl                  # one sequence per line
//! ```

use clap::Parser;
use keypad_calc_cli::{
    handlers::{execute_repl, execute_run},
    logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Reporter, Verbosity,
};
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(config.verbosity)?;

    let reporter = Reporter::new(config.use_color(), config.verbosity.is_quiet());
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Run(args) => execute_run(&args, &reporter, &mut stdout),
        Commands::Repl(args) => {
            let stdin = std::io::stdin();
            let prompt = (!args.no_prompt && stdin.is_terminal()).then_some(args.prompt.as_str());
            if prompt.is_some() {
                reporter.info("Type keys and press Enter; C clears, q quits");
            }
            execute_repl(stdin.lock(), &mut stdout, &reporter, prompt)
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
