//! Runtime values.
//!
//! Every consumption site (arithmetic, comparison, truthiness, printing)
//! matches on [`Value`] exhaustively; there is no implicit string/number
//! coercion.

use std::fmt;

/// A runtime value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Value {
    /// Result of special forms, `write-line`, and unbound variables.
    #[default]
    Nil,
    Int(i64),
    Bool(bool),
    Str(String),
}

impl Value {
    /// Truthiness for `if` / `while` conditions.
    ///
    /// `nil`, `false`, `0` and `""` are false; everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Int(n) => *n != 0,
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
        }
    }

    /// Integer view used by `add`, `sub`, `<` and `>`.
    ///
    /// Booleans coerce to `0`/`1`. Strings and `nil` have no integer view.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Nil | Value::Str(_) => None,
        }
    }

    /// Name used in type mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s}"),
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
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
