//! Source positions.
//!
//! A `Pos` is a 1-based byte offset into a source file, so that `Pos(0)` can
//! mean "no position". The source file model turns positions into line and
//! column pairs.

use std::fmt;

/// Opaque 1-based offset into a source file.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Pos(u32);

impl Pos {
    /// The "no position" sentinel.
    pub const NONE: Pos = Pos(0);

    /// Create a position from its raw value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Pos(raw)
    }

    /// Position of the byte at `offset` in a file starting at `base`.
    ///
    /// # Panics
    /// Panics if the result does not fit in a `u32`.
    #[inline]
    pub fn at_offset(base: Pos, offset: usize) -> Self {
        let offset = u32::try_from(offset)
            .unwrap_or_else(|_| panic!("source offset {offset} exceeds {} bytes", u32::MAX));
        Pos(base.0 + offset)
    }

    /// Get the raw value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Anything but `Pos::NONE` is a real position.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }

    /// Move forward by `n` bytes.
    #[inline]
    #[must_use]
    pub const fn advance(self, n: u32) -> Pos {
        Pos(self.0 + n)
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Pos({})", self.0)
        } else {
            write!(f, "Pos::NONE")
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Start and end position of a node.
///
/// For parenthesised forms `start` is the `(` and `end` the `)`. For leaf
/// tokens `end` is one past the last byte.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    #[inline]
    pub const fn new(start: Pos, end: Pos) -> Self {
        Span { start, end }
    }

    /// Span of a token with literal text `lit` starting at `start`.
    #[inline]
    pub fn of_token(start: Pos, lit: &str) -> Self {
        let len = u32::try_from(lit.len()).unwrap_or(u32::MAX);
        Span {
            start,
            end: start.advance(len),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
