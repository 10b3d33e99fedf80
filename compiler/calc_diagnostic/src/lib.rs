//! Diagnostics for the calc interpreter.
//!
//! Every stage reports problems into the `SourceFile` of the session being
//! processed:
//! - the scanner records line breaks and lexical errors
//! - the parser records syntax errors and keeps going
//! - the evaluator records runtime errors and stops
//!
//! The entry points print all recorded diagnostics together and return no
//! result whenever the count is non-zero.
//!
//! # Error Guarantees
//!
//! `ErrorGuaranteed` is only handed out by `SourceFile::report`, so a
//! function returning `Result<T, ErrorGuaranteed>` has proven that the
//! failure was recorded somewhere.

mod diagnostic;
mod error_code;
mod guarantee;
mod source_file;

pub use diagnostic::{
    arity_mismatch, division_by_zero, empty_expression, expected_case, expected_identifier,
    expected_rparen, import_unsupported, invalid_encoding, invalid_number, missing_operand,
    nested_head, not_a_function, too_few_operands, undeclared_identifier, unexpected_token,
    unexpected_top_level, unknown_identifier, unterminated_string, Diagnostic,
};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use source_file::{LineCol, SourceFile};
