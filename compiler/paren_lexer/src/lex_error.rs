//! Lexer error types.
//!
//! Every lexer failure is fatal: the program is rejected before any form is
//! evaluated. Each error knows WHERE (`span`) and WHAT (`kind`), and converts
//! into a [`Diagnostic`] for rendering.

use std::fmt;

use paren_diagnostic::{Diagnostic, ErrorCode};
use paren_ir::Span;

/// A lexer error with the location that caused it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// `"` with no closing `"` before end of input.
    UnterminatedString,
    /// `(` with no matching `)` before end of input.
    UnclosedParen,
    /// `)` with no open `(` to close.
    UnexpectedCloseParen,
    /// Source exceeds the 4 GiB addressable by a [`Span`].
    SourceTooLarge { len: usize },
    /// The tokenizer met a delimiter the matcher never recorded.
    UnmatchedDelimiter { delimiter: char },
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }

    /// Error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnclosedParen => ErrorCode::E1003,
            LexErrorKind::UnexpectedCloseParen => ErrorCode::E1001,
            LexErrorKind::SourceTooLarge { .. } | LexErrorKind::UnmatchedDelimiter { .. } => {
                ErrorCode::E9001
            }
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnterminatedString => "string starts here",
            LexErrorKind::UnclosedParen => "this `(` is never closed",
            LexErrorKind::UnexpectedCloseParen => "no matching `(`",
            LexErrorKind::SourceTooLarge { .. } | LexErrorKind::UnmatchedDelimiter { .. } => {
                "here"
            }
        };
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, label)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::UnclosedParen => write!(f, "unclosed parenthesis"),
            LexErrorKind::UnexpectedCloseParen => write!(f, "unexpected closing parenthesis"),
            LexErrorKind::SourceTooLarge { len } => {
                write!(f, "source is too large ({len} bytes, limit is {})", u32::MAX)
            }
            LexErrorKind::UnmatchedDelimiter { delimiter } => {
                write!(f, "internal error: no recorded match for `{delimiter}`")
            }
        }
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests;
