//! Calc driver library.
//!
//! Everything the `calc` binary does, as functions over an `Interpreter`,
//! so it can be exercised with a buffering print handler.

mod config;
mod error;
mod logging;
pub mod repl;
pub mod run;

pub use config::{Config, Mode, USAGE};
pub use error::CliError;
pub use logging::init_tracing;

use std::io;

use calc_eval::Interpreter;

/// Carry out `config` with `interpreter`, reading REPL input from stdin.
pub fn execute(config: &Config, interpreter: &Interpreter) -> Result<(), CliError> {
    match &config.mode {
        Mode::Help => interpreter.print_handler().println(USAGE),
        Mode::Version => interpreter
            .print_handler()
            .println(&format!("calc {}", env!("CARGO_PKG_VERSION"))),
        Mode::Repl => repl::run_repl(interpreter, io::stdin().lock())?,
        Mode::Run(path) => run::run_path(interpreter, path)?,
        Mode::Lex(path) => run::lex_file(interpreter, path)?,
    }
    Ok(())
}
