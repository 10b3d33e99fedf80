//! Command-line configuration.
//!
//! Arguments are parsed by hand; there are only a few.

use std::path::PathBuf;

use crate::CliError;

/// What the driver should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Interactive read-eval-print loop.
    Repl,
    /// Evaluate a file, or every file in a directory.
    Run(PathBuf),
    /// Print the tokens of a file.
    Lex(PathBuf),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
}

impl Config {
    /// Parse arguments, not including the program name.
    pub fn from_args<I>(args: I) -> Result<Config, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let mode = match args.as_slice() {
            [] => Mode::Repl,
            [flag] if flag == "--help" || flag == "-h" => Mode::Help,
            [flag] if flag == "--version" || flag == "-V" => Mode::Version,
            [cmd] if cmd == "repl" => Mode::Repl,
            [cmd, path] if cmd == "run" => Mode::Run(PathBuf::from(path)),
            [cmd, path] if cmd == "lex" => Mode::Lex(PathBuf::from(path)),
            [cmd] if cmd == "run" || cmd == "lex" => {
                return Err(CliError::Usage(format!("missing file path for '{cmd}'")));
            }
            [flag] if flag.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option '{flag}'")));
            }
            [path] => Mode::Run(PathBuf::from(path)),
            _ => {
                let extra = args.last().map_or("", String::as_str);
                return Err(CliError::Usage(format!("unexpected argument '{extra}'")));
            }
        };
        Ok(Config { mode })
    }
}

pub const USAGE: &str = "\
Usage: calc [command] [path]

Commands:
  <path>          Evaluate a file, or every file in a directory
  run <path>      Same as above
  lex <file>      Print the tokens of a file
  repl            Start the interactive REPL (default with no arguments)

Options:
  -h, --help      Print this help
  -V, --version   Print the version

Set RUST_LOG (for example RUST_LOG=calc_eval=debug) to enable tracing.";
