//! Parse error types.
//!
//! The AST builder fails in exactly one way of its own (a digit-leading
//! lexeme that is not an integer); everything else it reports comes from
//! the lexer and is wrapped unchanged.

use std::fmt;

use paren_diagnostic::{Diagnostic, ErrorCode};
use paren_ir::Span;
use paren_lexer::LexError;

/// Failure while turning source text into a [`Program`](paren_ir::Program).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Delimiter matching or tokenizing failed.
    Lex(LexError),
    /// A lexeme starting with a digit did not parse fully as an `i64`.
    InvalidInteger { span: Span, lexeme: String },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span,
            ParseError::InvalidInteger { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::InvalidInteger { .. } => ErrorCode::E0002,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.to_diagnostic(),
            ParseError::InvalidInteger { span, lexeme } => Diagnostic::error(ErrorCode::E0002)
                .with_message(self.to_string())
                .with_label(*span, "not a number")
                .with_note(format!(
                    "`{lexeme}` starts with a digit, so it must be a whole 64-bit integer"
                )),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{err}"),
            ParseError::InvalidInteger { lexeme, .. } => {
                write!(f, "not a number: `{lexeme}`")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(err) => Some(err),
            ParseError::InvalidInteger { .. } => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

#[cfg(test)]
mod tests;
