//! Token cursor over the pull-based scanner.
//!
//! Holds the current token, skips comments, and tracks parenthesis depth so
//! error recovery can find the end of the enclosing top-level form.

use calc_diagnostic::{Diagnostic, ErrorGuaranteed, SourceFile};
use calc_ir::{Pos, Span, TokenKind};
use calc_lexer::Scanner;

pub(crate) struct Cursor<'a> {
    scanner: Scanner<'a>,
    kind: TokenKind,
    pos: Pos,
    lit: &'a str,
    /// Open parentheses consumed and not yet closed.
    depth: u32,
    /// The scanner already reported the current token.
    lexed_error: bool,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first non-comment token.
    pub(crate) fn new(file: &'a mut SourceFile, text: &'a str) -> Self {
        let mut cursor = Cursor {
            scanner: Scanner::new(file, text),
            kind: TokenKind::Eof,
            pos: Pos::NONE,
            lit: "",
            depth: 0,
            lexed_error: false,
        };
        cursor.fetch();
        cursor
    }

    pub(crate) fn file(&self) -> &SourceFile {
        self.scanner.file()
    }

    #[inline]
    pub(crate) fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub(crate) fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub(crate) fn lit(&self) -> &'a str {
        self.lit
    }

    /// Span of the current token.
    pub(crate) fn span(&self) -> Span {
        Span::of_token(self.pos, self.lit)
    }

    #[inline]
    pub(crate) fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True at `)` or end of input, where a list of operands stops.
    #[inline]
    pub(crate) fn at_close(&self) -> bool {
        matches!(self.kind, TokenKind::RParen | TokenKind::Eof)
    }

    /// Text describing the current token for diagnostics.
    pub(crate) fn found(&self) -> &'a str {
        if self.lit.is_empty() {
            self.kind.display_name()
        } else {
            self.lit
        }
    }

    /// Consume the current token and move to the next non-comment token.
    pub(crate) fn advance(&mut self) {
        match self.kind {
            TokenKind::LParen => self.depth += 1,
            TokenKind::RParen => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        self.fetch();
    }

    fn fetch(&mut self) {
        loop {
            let before = self.scanner.file().num_errors();
            let (kind, pos, lit) = self.scanner.scan();
            if kind != TokenKind::Comment {
                self.kind = kind;
                self.pos = pos;
                self.lit = lit;
                self.lexed_error = self.scanner.file().num_errors() > before;
                return;
            }
        }
    }

    /// Report the current token as out of place.
    ///
    /// Tokens the scanner already rejected (unterminated strings, invalid
    /// encoding) are not reported a second time.
    pub(crate) fn unexpected(
        &mut self,
        diagnostic: impl FnOnce(Pos, &str) -> Diagnostic,
    ) -> ErrorGuaranteed {
        if self.lexed_error {
            if let Some(guar) = ErrorGuaranteed::from_error_count(self.file().num_errors()) {
                return guar;
            }
        }
        let diagnostic = diagnostic(self.pos, self.found());
        self.report(diagnostic)
    }

    /// Record a diagnostic in the source file.
    ///
    /// Errors found at end of input are moved onto the last byte of the
    /// file, since the end position itself lies outside it.
    pub(crate) fn report(&mut self, mut diagnostic: Diagnostic) -> ErrorGuaranteed {
        let file = self.scanner.file_mut();
        if diagnostic.pos == file.end() {
            if let Some(last) = file.last_pos() {
                diagnostic.pos = last;
            }
        }
        file.report(diagnostic)
    }
}
