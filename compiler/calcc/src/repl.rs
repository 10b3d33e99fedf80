//! Interactive read-eval-print loop.
//!
//! Lines accumulate until an empty line, then the collected text is
//! evaluated as one unnamed file and a non-nil result is printed. `q` on a
//! line of its own quits. Every session starts from an empty environment.

use std::io::{self, BufRead, Write};

use calc_eval::Interpreter;

use crate::run::strip_cr;
use crate::CliError;

pub const PROMPT: &str = ">>>";

/// Print the welcome banner.
pub fn banner(interpreter: &Interpreter) {
    let out = interpreter.print_handler();
    out.println(&format!("Welcome to Calc REPL {}", env!("CARGO_PKG_VERSION")));
    out.println("");
    out.println("Type in expression(s) to evaluate on one or more lines.");
    out.println("Press enter on an empty line to execute the expression(s).");
    out.println("Type 'q' (without quotes) on an empty line to exit.");
}

/// Run the loop until `q` or end of input.
pub fn run_repl<R: BufRead>(interpreter: &Interpreter, mut input: R) -> Result<(), CliError> {
    banner(interpreter);
    let out = interpreter.print_handler();

    loop {
        out.print(PROMPT);
        io::stdout().flush()?;
        let mut expr = String::new();
        let mut at_eof = false;
        loop {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                at_eof = true;
                break;
            }
            let line = strip_cr(&line);
            match line.trim_end_matches('\n') {
                "q" => {
                    out.println("QUIT!");
                    return Ok(());
                }
                "" => break,
                _ => expr.push_str(&line),
            }
        }

        if !expr.trim().is_empty() {
            tracing::debug!(bytes = expr.len(), "evaluating REPL input");
            if let Some(value) = interpreter.eval_expr(&expr) {
                if !value.is_nil() {
                    out.println(&value.to_string());
                }
            }
        }
        if at_eof {
            out.println("");
            return Ok(());
        }
    }
}
