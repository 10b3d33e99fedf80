use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: Scanner errors
/// - E1xxx: Parser errors
/// - E2xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (E0xxx)
    /// Invalid UTF-8 encoding unit
    E0001,
    /// Unterminated string literal
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Empty expression `()`
    E1002,
    /// Missing closing `)`
    E1003,
    /// Expected identifier
    E1004,
    /// Wrong number of operands or arguments
    E1005,
    /// Undeclared identifier or function
    E1006,
    /// Invalid number literal
    E1007,
    /// Expression used as the head of an expression
    E1008,
    /// Unsupported form (`import`)
    E1009,

    // Evaluation Errors (E2xxx)
    /// Unknown identifier at evaluation time
    E2001,
    /// Division or modulo by zero
    E2002,
    /// Called name is not a function
    E2003,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
