use std::fmt;

use calc_ir::Pos;

use crate::ErrorCode;

/// A (position, message) pair recorded against a source file.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Where it went wrong.
    pub pos: Pos,
    /// What went wrong.
    pub message: String,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, pos: Pos, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            pos,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}] at {}: {}", self.code, self.pos, self.message)
    }
}

/// Create an "invalid encoding" diagnostic.
pub fn invalid_encoding(pos: Pos) -> Diagnostic {
    Diagnostic::new(ErrorCode::E0001, pos, "invalid UTF-8 encoding")
}

/// Create an "unterminated string" diagnostic.
pub fn unterminated_string(pos: Pos) -> Diagnostic {
    Diagnostic::new(ErrorCode::E0002, pos, "unterminated string literal")
}

/// Create an "unexpected token" diagnostic for an operand position.
pub fn unexpected_token(pos: Pos, found: &str) -> Diagnostic {
    Diagnostic::new(ErrorCode::E1001, pos, format!("unexpected token: {found}"))
}

/// Create an "unexpected token" diagnostic for a top-level position.
pub fn unexpected_top_level(pos: Pos, found: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E1001,
        pos,
        format!("unexpected token outside of expression: {found}"),
    )
}

/// Create an "empty expression" diagnostic for `()`.
pub fn empty_expression(pos: Pos) -> Diagnostic {
    Diagnostic::new(ErrorCode::E1002, pos, "empty expression not allowed")
}

/// Create a diagnostic for `((...) ...)`.
pub fn nested_head(pos: Pos) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E1008,
        pos,
        "first element of an expression may not be another expression",
    )
}

/// Create a "missing `)`" diagnostic.
pub fn expected_rparen(pos: Pos, found: &str) -> Diagnostic {
    Diagnostic::new(ErrorCode::E1003, pos, format!("expected ')', got: {found}"))
}

/// Create an "expected identifier" diagnostic; `what` names the slot.
pub fn expected_identifier(pos: Pos, what: &str, found: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E1004,
        pos,
        format!("{what} must be an identifier, got: {found}"),
    )
}

/// Create a diagnostic for a `switch` arm that is not a `case` form.
pub fn expected_case(pos: Pos, found: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E1001,
        pos,
        format!("switch arms must be case expressions, got: {found}"),
    )
}

/// Create a diagnostic for a form with too few operands.
pub fn too_few_operands(pos: Pos, what: &str, min: usize) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E1005,
        pos,
        format!("{what} must have at least {min} arguments"),
    )
}

/// Create a diagnostic for a required operand that is absent.
pub fn missing_operand(pos: Pos, form: &str, operand: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E1005,
        pos,
        format!("{form} expression is missing its {operand}"),
    )
}

/// Create a diagnostic for a call with the wrong number of arguments.
pub fn arity_mismatch(pos: Pos, name: &str, expected: usize, found: usize) -> Diagnostic {
    let plural = if expected == 1 { "" } else { "s" };
    Diagnostic::new(
        ErrorCode::E1005,
        pos,
        format!("function {name} expects {expected} argument{plural}, got {found}"),
    )
}

/// Create an "undeclared identifier" diagnostic.
pub fn undeclared_identifier(pos: Pos, name: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E1006,
        pos,
        format!("undeclared identifier: {name}"),
    )
}

/// Create an "invalid number" diagnostic.
pub fn invalid_number(pos: Pos, lit: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E1007,
        pos,
        format!("invalid number literal: {lit}"),
    )
}

/// Create a diagnostic for the reserved `import` form.
pub fn import_unsupported(pos: Pos) -> Diagnostic {
    Diagnostic::new(ErrorCode::E1009, pos, "import is not supported")
}

/// Create an "unknown identifier" diagnostic for evaluation.
pub fn unknown_identifier(pos: Pos, name: &str) -> Diagnostic {
    Diagnostic::new(ErrorCode::E2001, pos, format!("unknown identifier: {name}"))
}

/// Create a "division by zero" diagnostic.
pub fn division_by_zero(pos: Pos) -> Diagnostic {
    Diagnostic::new(ErrorCode::E2002, pos, "division by zero")
}

/// Create a diagnostic for calling a name that is not bound to a function.
///
/// The parser uses `E1006` (the callee was never declared as a function);
/// the evaluator uses `E2003` (a later binding shadowed the function).
pub fn not_a_function(code: ErrorCode, pos: Pos, name: &str) -> Diagnostic {
    Diagnostic::new(code, pos, format!("undeclared function: {name}"))
}
