//! Error recovery for the parser.
//!
//! calc forms are fully parenthesised, so after an error inside a form the
//! parser can always resynchronize by skipping to the `)` that closes the
//! enclosing top-level form.

use super::cursor::Cursor;

/// Skip tokens until every parenthesis opened since `depth` is closed again,
/// or input ends.
pub(crate) fn synchronize(cursor: &mut Cursor<'_>, depth: u32) {
    let start = cursor.pos();
    while cursor.depth() > depth && !cursor.is_at_end() {
        cursor.advance();
    }
    tracing::debug!(from = ?start, to = ?cursor.pos(), "recovered after parse error");
}
