//! The per-session source file model.
//!
//! A `SourceFile` does not hold the text. It remembers the text length, the
//! offsets of line breaks seen by the scanner, and the diagnostics recorded
//! by every stage, which is all that is needed to print
//! `name - Line: L Column: C - message` lines.

use std::fmt;

use calc_ir::Pos;

use crate::{Diagnostic, ErrorGuaranteed};

/// 1-based line and column of a position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: {} Column: {}", self.line, self.column)
    }
}

#[derive(Clone, Debug)]
pub struct SourceFile {
    name: String,
    base: Pos,
    size: usize,
    /// Byte offset (from the start of the text) of every `\n`, ascending.
    lines: Vec<u32>,
    errors: Vec<Diagnostic>,
}

impl SourceFile {
    /// Position of the first byte of every file.
    pub const BASE: Pos = Pos::new(1);

    /// Create the model for `text`. An empty name means "unnamed".
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        SourceFile {
            name: name.into(),
            base: Self::BASE,
            size: text.len(),
            lines: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> Pos {
        self.base
    }

    /// Length of the text in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Position just past the last byte, where the scanner reports EOF.
    pub fn end(&self) -> Pos {
        Pos::at_offset(self.base, self.size)
    }

    /// Position of the last byte, if the file is not empty.
    pub fn last_pos(&self) -> Option<Pos> {
        self.size
            .checked_sub(1)
            .map(|offset| Pos::at_offset(self.base, offset))
    }

    /// A position is valid iff it lies within `[base, base + size)`.
    pub fn is_valid_pos(&self, pos: Pos) -> bool {
        pos >= self.base && pos < self.end()
    }

    /// Record a line break at byte `offset`.
    ///
    /// The scanner calls this once per `\n` in increasing order.
    pub fn add_line(&mut self, offset: usize) {
        let offset = u32::try_from(offset)
            .unwrap_or_else(|_| panic!("line offset {offset} exceeds {} bytes", u32::MAX));
        debug_assert!(
            self.lines.last().map_or(true, |&last| last < offset),
            "line breaks recorded out of order"
        );
        self.lines.push(offset);
    }

    pub fn line_count(&self) -> usize {
        self.lines.len() + 1
    }

    /// Record a diagnostic and get proof that it was recorded.
    ///
    /// # Panics
    /// Panics if the diagnostic's position is outside the file. That is a
    /// bug in the stage reporting it, not a problem with the input.
    pub fn report(&mut self, diagnostic: Diagnostic) -> ErrorGuaranteed {
        assert!(
            self.is_valid_pos(diagnostic.pos),
            "invalid position {:?} for diagnostic `{}` (file spans {:?}..{:?})",
            diagnostic.pos,
            diagnostic.message,
            self.base,
            self.end()
        );
        self.errors.push(diagnostic);
        ErrorGuaranteed::new()
    }

    pub fn num_errors(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Diagnostics in the order they were recorded.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Translate a position into a 1-based line and column.
    ///
    /// Uses the line breaks recorded so far, so positions after the last
    /// scanned newline report on the last known line.
    pub fn position(&self, pos: Pos) -> LineCol {
        let offset = pos.raw().saturating_sub(self.base.raw());
        let idx = self.lines.partition_point(|&nl| nl < offset);
        let line_start = if idx == 0 { 0 } else { self.lines[idx - 1] + 1 };
        LineCol {
            line: u32::try_from(idx).unwrap_or(u32::MAX).saturating_add(1),
            column: offset - line_start + 1,
        }
    }

    /// Render one diagnostic in the user-facing format.
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let at = self.position(diagnostic.pos);
        if self.name.is_empty() {
            format!("{at} - {}", diagnostic.message)
        } else {
            format!("{} - {at} - {}", self.name, diagnostic.message)
        }
    }

    /// Render every recorded diagnostic, in order.
    pub fn formatted_errors(&self) -> impl Iterator<Item = String> + '_ {
        self.errors.iter().map(|d| self.format_diagnostic(d))
    }
}

#[cfg(test)]
mod tests;
