//! Running files and directories.

use std::fs;
use std::path::{Path, PathBuf};

use calc_diagnostic::SourceFile;
use calc_eval::{Interpreter, Value};
use calc_lexer::tokenize;

use crate::CliError;

/// Remove every carriage return.
pub fn strip_cr(text: &str) -> String {
    text.replace('\r', "")
}

/// Read a source file.
///
/// Invalid UTF-8 is replaced with U+FFFD, which the scanner reports as an
/// encoding error at its position. Carriage returns are stripped.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(CliError::io(path))?;
    Ok(strip_cr(&String::from_utf8_lossy(&bytes)))
}

/// Evaluate one file. Diagnostics go to the interpreter's print handler.
pub fn run_file(interpreter: &Interpreter, path: &Path) -> Result<Option<Value>, CliError> {
    let text = read_source(path)?;
    let name = path.display().to_string();
    tracing::debug!(path = %name, bytes = text.len(), "running file");
    Ok(interpreter.eval_file(&name, &text))
}

/// Evaluate every regular file in `dir`, in name order, each in its own
/// session. Returns the files evaluated.
pub fn run_directory(interpreter: &Interpreter, dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(CliError::io(dir))? {
        let entry = entry.map_err(CliError::io(dir))?;
        let file_type = entry.file_type().map_err(CliError::io(entry.path()))?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();

    for path in &files {
        run_file(interpreter, path)?;
    }
    Ok(files)
}

/// Evaluate a file, or every file in a directory.
pub fn run_path(interpreter: &Interpreter, path: &Path) -> Result<(), CliError> {
    let metadata = fs::metadata(path).map_err(CliError::io(path))?;
    if metadata.is_dir() {
        let files = run_directory(interpreter, path)?;
        tracing::debug!(dir = %path.display(), files = files.len(), "ran directory");
    } else {
        run_file(interpreter, path)?;
    }
    Ok(())
}

/// Render the tokens of `text`, one per line, followed by any scanner
/// diagnostics.
pub fn lex_text(name: &str, text: &str) -> Vec<String> {
    let mut source = SourceFile::new(name, text);
    let tokens: Vec<_> = tokenize(&mut source, text)
        .into_iter()
        .map(|(kind, pos, lit)| (kind, pos, lit.to_string()))
        .collect();

    let mut lines = Vec::with_capacity(tokens.len() + 1);
    lines.push(format!("Tokens for '{name}' ({} tokens):", tokens.len()));
    for (kind, pos, lit) in tokens {
        lines.push(format!("  {kind:?} @ {} {lit:?}", source.position(pos)));
    }
    lines.extend(source.formatted_errors());
    lines
}

/// Print the tokens of a file.
pub fn lex_file(interpreter: &Interpreter, path: &Path) -> Result<(), CliError> {
    let text = read_source(path)?;
    for line in lex_text(&path.display().to_string(), &text) {
        interpreter.print_handler().println(&line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_cr() {
        assert_eq!(strip_cr("(+ 1\r\n 2)\r\n"), "(+ 1\n 2)\n");
        assert_eq!(strip_cr("no returns"), "no returns");
    }

    #[test]
    fn test_lex_text() {
        assert_eq!(
            lex_text("t", "(+ 1\n x)"),
            vec![
                "Tokens for 't' (5 tokens):".to_string(),
                "  LParen @ Line: 1 Column: 1 \"(\"".to_string(),
                "  Add @ Line: 1 Column: 2 \"+\"".to_string(),
                "  Number @ Line: 1 Column: 4 \"1\"".to_string(),
                "  Ident @ Line: 2 Column: 2 \"x\"".to_string(),
                "  RParen @ Line: 2 Column: 3 \")\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_lex_text_reports_scanner_errors() {
        let lines = lex_text("t", "\"open");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("t - Line: 1 Column: 1 - unterminated string literal")
        );
    }
}
