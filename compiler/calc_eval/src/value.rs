//! Runtime values.

use std::fmt;

use calc_ir::Pos;

/// Result of evaluating a node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Int(i64),
    /// String contents, without the surrounding quotes.
    Str(String),
    /// "No value": the result of `define`, `set`, `print`, an `if` without a
    /// taken branch, and similar forms.
    Nil,
    /// An identifier that had no binding when evaluated.
    ///
    /// Carried up to the top level, where it becomes an "unknown identifier"
    /// diagnostic. Anywhere else it prints as `nil`.
    Unresolved { name: String, pos: Pos },
}

impl Value {
    /// The integer inside, if this is an `Int`.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Condition truthiness: an integer of at least 1.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        self.as_int().is_some_and(|n| n >= 1)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Nil | Value::Unresolved { .. } => f.write_str("nil"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Int(i64::from(b))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::from("hi").to_string(), "hi");
        assert_eq!(Value::Nil.to_string(), "nil");
        let unresolved = Value::Unresolved {
            name: "x".to_string(),
            pos: Pos::new(1),
        };
        assert_eq!(unresolved.to_string(), "nil");
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::Int(1).is_truthy());
        assert!(Value::Int(7).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::Int(-1).is_truthy());
        assert!(!Value::from("1").is_truthy());
        assert!(!Value::Nil.is_truthy());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Value::from(true), Value::Int(1));
        assert_eq!(Value::from(false), Value::Int(0));
    }
}
