//! Recursive descent parser for calc.
//!
//! Pulls tokens from the scanner one at a time and produces a flat AST in a
//! `NodeArena`. Names are resolved while parsing: every `define` and `set`
//! binds into a parse-time `ScopeTree<Symbol>`, so references to undeclared
//! names and calls with the wrong argument count are caught here rather than
//! at evaluation time.
//!
//! Errors are recorded in the session's `SourceFile` and parsing continues
//! with the next top-level form. Callers decide what to do with a `File`
//! whose source has errors; every entry point in `calc_eval` discards it.

mod cursor;
mod grammar;
mod recovery;

use calc_diagnostic::{ErrorGuaranteed, SourceFile};
use calc_ir::{File, NodeArena, NodeId, NodeKind, ScopeId, ScopeTree, Span, Symbol, TokenKind};

use cursor::Cursor;
use recovery::synchronize;

/// Result type for grammar productions.
///
/// The error has always been recorded in the source file already.
pub(crate) type ParseResult<T> = Result<T, ErrorGuaranteed>;

/// Output of [`parse_expr`]: the parsed file plus the source model holding
/// its line table and diagnostics.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub file: File,
    pub source: SourceFile,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.source.has_errors()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: NodeArena,
    scopes: ScopeTree<Symbol>,
    /// Scope new names bind into. Only differs from the root inside a
    /// `define`.
    scope: ScopeId,
}

impl<'a> Parser<'a> {
    /// Create a parser reading `text` and reporting into `file`.
    pub fn new(file: &'a mut SourceFile, text: &'a str) -> Self {
        let scopes = ScopeTree::new();
        Parser {
            cursor: Cursor::new(file, text),
            arena: NodeArena::new(),
            scope: scopes.root(),
            scopes,
        }
    }

    /// Parse top-level forms until end of input.
    ///
    /// # Panics
    /// Panics if scope pushes and pops did not balance, which is a parser bug.
    pub fn parse(mut self) -> File {
        let mut nodes = Vec::new();
        while !self.cursor.is_at_end() {
            if let Ok(id) = self.parse_top_level() {
                nodes.push(id);
            }
        }

        assert!(
            self.scope == self.scopes.root(),
            "imbalanced scope: parsing ended in {:?}",
            self.scope
        );

        let span = {
            let source = self.cursor.file();
            Span::new(source.base(), source.end())
        };
        File {
            span,
            nodes,
            arena: self.arena,
            scopes: self.scopes,
        }
    }

    fn parse_top_level(&mut self) -> ParseResult<NodeId> {
        tracing::trace!(
            pos = ?self.cursor.pos(),
            token = %self.cursor.kind(),
            "top-level form"
        );
        match self.cursor.kind() {
            // Bare names are resolved by the evaluator.
            TokenKind::Ident => Ok(self.parse_name()),
            TokenKind::Number => self.parse_number(),
            TokenKind::String => Ok(self.parse_string()),
            TokenKind::LParen => {
                let depth = self.cursor.depth();
                let result = self.parse_form();
                if result.is_err() {
                    synchronize(&mut self.cursor, depth);
                }
                result
            }
            _ => {
                let err = self
                    .cursor
                    .unexpected(calc_diagnostic::unexpected_top_level);
                self.cursor.advance();
                Err(err)
            }
        }
    }

    #[inline]
    fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.arena.alloc(kind, span)
    }
}

/// Parse `text` as the contents of `file`.
///
/// Returns `None` without parsing if `file` was created for a text of a
/// different length, since positions would not line up.
pub fn parse_file(file: &mut SourceFile, text: &str) -> Option<File> {
    if file.size() != text.len() {
        tracing::error!(
            name = file.name(),
            expected = file.size(),
            found = text.len(),
            "source file size does not match text"
        );
        return None;
    }
    let parsed = Parser::new(file, text).parse();
    tracing::debug!(
        name = file.name(),
        forms = parsed.nodes.len(),
        lines = file.line_count(),
        errors = file.num_errors(),
        "parsed file"
    );
    Some(parsed)
}

/// Parse a standalone text with an unnamed source file.
pub fn parse_expr(text: &str) -> ParseOutput {
    let mut source = SourceFile::new("", text);
    let file = Parser::new(&mut source, text).parse();
    ParseOutput { file, source }
}
