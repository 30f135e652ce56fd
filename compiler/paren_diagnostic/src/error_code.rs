//! Error codes for all interpreter diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1003`) with the first digit
//! indicating the phase. Used for `--explain` lookups.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Arity errors
/// - E6xxx: Runtime / eval errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid integer literal
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected closing parenthesis
    E1001,
    /// Unclosed parenthesis
    E1003,
    /// Malformed special form
    E1004,

    // Arity Errors (E2xxx)
    /// Special form operand count mismatch
    E2001,
    /// Function argument count mismatch
    E2004,

    // Runtime / Eval Errors (E6xxx)
    /// Operator not found
    E6001,
    /// Type mismatch
    E6002,
    /// Integer overflow
    E6003,

    // Internal Errors (E9xxx)
    /// Internal interpreter error
    E9001,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        // Lexer
        ErrorCode::E0001,
        ErrorCode::E0002,
        // Parser
        ErrorCode::E1001,
        ErrorCode::E1003,
        ErrorCode::E1004,
        // Arity
        ErrorCode::E2001,
        ErrorCode::E2004,
        // Runtime / Eval
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        // Internal
        ErrorCode::E9001,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Short description used as the `--explain` heading.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid integer literal",
            ErrorCode::E1001 => "unexpected closing parenthesis",
            ErrorCode::E1003 => "unclosed parenthesis",
            ErrorCode::E1004 => "malformed special form",
            ErrorCode::E2001 => "wrong number of operands for special form",
            ErrorCode::E2004 => "wrong number of arguments to function",
            ErrorCode::E6001 => "operator not found",
            ErrorCode::E6002 => "type mismatch",
            ErrorCode::E6003 => "integer overflow",
            ErrorCode::E9001 => "internal interpreter error",
        }
    }

    /// Check if this is a syntax error (lexer or parser phase).
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001
                | ErrorCode::E0002
                | ErrorCode::E1001
                | ErrorCode::E1003
                | ErrorCode::E1004
        )
    }

    /// Check if this is an arity error (E2xxx range).
    pub fn is_arity_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2004)
    }

    /// Check if this is a runtime/eval error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        matches!(self, ErrorCode::E6001 | ErrorCode::E6002 | ErrorCode::E6003)
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2004"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
