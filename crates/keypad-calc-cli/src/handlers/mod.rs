//! Command handlers, kept out of main.rs so they can run against in-memory I/O

pub mod repl;
pub mod run;

pub use repl::execute_repl;
pub use run::execute_run;
