//! calc command-line interface.

use std::process::ExitCode;

use calc_eval::Interpreter;
use calcc::{execute, init_tracing, CliError, Config, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let result = Config::from_args(std::env::args().skip(1))
        .and_then(|config| execute(&config, &Interpreter::new()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ CliError::Usage(_)) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
