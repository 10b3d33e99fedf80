//! Token kinds produced by the scanner.
//!
//! The scanner returns `(TokenKind, Pos, &str)` triples; the literal text is
//! borrowed from the source, so tokens themselves carry no data.

use std::fmt;

/// Classification of a scanned token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Eof,
    Comment,
    /// A character no scanner rule accepts (or an invalid encoding unit).
    Illegal,

    // Operators and delimiters
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    LParen,
    RParen,
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    Neq,

    // Literals
    Ident,
    Number,
    String,

    // Keywords
    And,
    Case,
    Concat,
    Define,
    If,
    Import,
    Or,
    Print,
    Set,
    Switch,
}

/// Reserved words, sorted for binary search.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("case", TokenKind::Case),
    ("concat", TokenKind::Concat),
    ("define", TokenKind::Define),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("set", TokenKind::Set),
    ("switch", TokenKind::Switch),
];

/// Classify an identifier: its keyword kind, or `TokenKind::Ident`.
pub fn lookup_keyword(ident: &str) -> TokenKind {
    KEYWORDS
        .binary_search_by(|(kw, _)| (*kw).cmp(ident))
        .map_or(TokenKind::Ident, |i| KEYWORDS[i].1)
}

impl TokenKind {
    /// Human-readable name used in diagnostics when the literal is empty.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Comment => "comment",
            TokenKind::Illegal => "illegal character",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Mod => "%",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Eq => "=",
            TokenKind::Gt => ">",
            TokenKind::Gte => ">=",
            TokenKind::Lt => "<",
            TokenKind::Lte => "<=",
            TokenKind::Neq => "<>",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::And => "and",
            TokenKind::Case => "case",
            TokenKind::Concat => "concat",
            TokenKind::Define => "define",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Set => "set",
            TokenKind::Switch => "switch",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests;
