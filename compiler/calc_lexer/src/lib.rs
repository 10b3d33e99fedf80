//! Scanner for calc using logos.
//!
//! `Scanner` is pull-based: the parser calls [`Scanner::scan`] once per
//! token. Alongside each token the scanner records every line break into the
//! session's `SourceFile`, and reports lexical errors there.

use calc_diagnostic::{invalid_encoding, unterminated_string, SourceFile};
use calc_ir::{lookup_keyword, Pos, TokenKind};
use logos::Logos;

/// Raw token from logos (before keyword lookup).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\f]+")] // Skip horizontal whitespace
enum RawToken {
    #[token("\n")]
    Newline,

    #[regex(r";[^\n]*")]
    Comment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[token("+")]
    Add,
    #[token("-")]
    Sub,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("%")]
    Mod,

    #[token("=")]
    Eq,
    #[token("<>")]
    Neq,
    #[token("<=")]
    Lte,
    #[token("<")]
    Lt,
    #[token(">=")]
    Gte,
    #[token(">")]
    Gt,

    // A '-' directly followed by a digit belongs to the number.
    #[regex(r"-?[0-9]+")]
    Number,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_-]*")]
    Ident,

    // String literal, quotes included. May span lines; no escapes.
    #[regex(r#""[^"]*""#)]
    String,

    #[regex(r#""[^"]*"#)]
    UnterminatedString,
}

/// Replacement character produced by lossy UTF-8 decoding.
const REPLACEMENT: char = '\u{FFFD}';

/// Pull-based scanner over one source text.
pub struct Scanner<'a> {
    lexer: logos::Lexer<'a, RawToken>,
    file: &'a mut SourceFile,
}

impl<'a> Scanner<'a> {
    /// Create a scanner for `src`, reporting into `file`.
    pub fn new(file: &'a mut SourceFile, src: &'a str) -> Self {
        Scanner {
            lexer: RawToken::lexer(src),
            file,
        }
    }

    /// The source file this scanner reports into.
    pub fn file(&self) -> &SourceFile {
        &*self.file
    }

    pub fn file_mut(&mut self) -> &mut SourceFile {
        &mut *self.file
    }

    /// Scan the next token.
    ///
    /// Returns the kind, the position of its first byte, and its literal
    /// text. At end of input returns `Eof` (with an empty literal) forever.
    pub fn scan(&mut self) -> (TokenKind, Pos, &'a str) {
        loop {
            let Some(result) = self.lexer.next() else {
                return (TokenKind::Eof, self.file.end(), "");
            };
            let start = self.lexer.span().start;
            let pos = Pos::at_offset(self.file.base(), start);
            let lit = self.lexer.slice();

            let kind = match result {
                Ok(RawToken::Newline) => {
                    self.file.add_line(start);
                    continue;
                }
                Ok(RawToken::Comment) => TokenKind::Comment,
                Ok(RawToken::LParen) => TokenKind::LParen,
                Ok(RawToken::RParen) => TokenKind::RParen,
                Ok(RawToken::Add) => TokenKind::Add,
                Ok(RawToken::Sub) => TokenKind::Sub,
                Ok(RawToken::Mul) => TokenKind::Mul,
                Ok(RawToken::Div) => TokenKind::Div,
                Ok(RawToken::Mod) => TokenKind::Mod,
                Ok(RawToken::Eq) => TokenKind::Eq,
                Ok(RawToken::Neq) => TokenKind::Neq,
                Ok(RawToken::Lte) => TokenKind::Lte,
                Ok(RawToken::Lt) => TokenKind::Lt,
                Ok(RawToken::Gte) => TokenKind::Gte,
                Ok(RawToken::Gt) => TokenKind::Gt,
                Ok(RawToken::Number) => TokenKind::Number,
                Ok(RawToken::Ident) => lookup_keyword(lit),
                Ok(RawToken::String) => {
                    self.record_lines(start, lit);
                    TokenKind::String
                }
                Ok(RawToken::UnterminatedString) => {
                    self.record_lines(start, lit);
                    let _ = self.file.report(unterminated_string(pos));
                    TokenKind::Illegal
                }
                Err(()) => {
                    if lit.starts_with(REPLACEMENT) {
                        let _ = self.file.report(invalid_encoding(pos));
                    }
                    TokenKind::Illegal
                }
            };
            return (kind, pos, lit);
        }
    }

    /// Record the line breaks inside a multi-line token.
    fn record_lines(&mut self, start: usize, lit: &str) {
        for (i, _) in lit.match_indices('\n') {
            self.file.add_line(start + i);
        }
    }
}

/// Scan all of `src` into `(kind, pos, literal)` triples, excluding `Eof`.
pub fn tokenize<'a>(file: &'a mut SourceFile, src: &'a str) -> Vec<(TokenKind, Pos, &'a str)> {
    let mut scanner = Scanner::new(file, src);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan();
        if token.0 == TokenKind::Eof {
            return tokens;
        }
        tokens.push(token);
    }
}

#[cfg(test)]
mod tests;
