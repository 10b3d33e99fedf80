//! Driver errors.
//!
//! Problems with the calc program itself are diagnostics printed by the
//! evaluator. These are failures of the driver: bad arguments or input that
//! cannot be read.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Usage(String),

    /// Reading REPL input or writing its output failed.
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),
}

impl CliError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> CliError {
        let path = path.into();
        move |source| CliError::Io { path, source }
    }
}
