//! Evaluation errors.
//!
//! Every error aborts the whole run. `EvalErrorKind` carries the structured
//! details (names, expected vs. actual counts) and picks the error code;
//! `EvalError` adds the span and the chain of user-function calls the error
//! escaped through.

use std::fmt;

use paren_diagnostic::{Diagnostic, ErrorCode};
use paren_ir::Span;

use crate::interpreter::Builtin;

/// Result of evaluation.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// How many operands or arguments a form accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(min) => count >= min,
            Arity::Between(min, max) => (min..=max).contains(&count),
        }
    }

    /// Largest count named in the message, used for pluralisation.
    fn headline(self) -> usize {
        match self {
            Arity::Exactly(n) | Arity::AtLeast(n) | Arity::Between(_, n) => n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
            Arity::Between(min, max) => write!(f, "{min} to {max}"),
        }
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A special form whose operands have the wrong shape.
    MalformedForm { form: String, reason: String },
    /// `if` / `while` / `set` / `defun` with the wrong operand count.
    SpecialFormArity {
        form: String,
        expected: Arity,
        got: usize,
    },
    /// A `defun` function called with the wrong argument count.
    ArityMismatch {
        name: String,
        expected: Arity,
        got: usize,
    },
    /// A built-in called with the wrong argument count.
    BuiltinArity {
        name: &'static str,
        expected: Arity,
        got: usize,
    },
    /// Operator names neither a defined function nor a built-in.
    OperatorNotFound { name: String },
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    IntegerOverflow { operation: &'static str },
}

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::MalformedForm { .. } => ErrorCode::E1004,
            Self::SpecialFormArity { .. } => ErrorCode::E2001,
            Self::ArityMismatch { .. } | Self::BuiltinArity { .. } => ErrorCode::E2004,
            Self::OperatorNotFound { .. } => ErrorCode::E6001,
            Self::TypeMismatch { .. } => ErrorCode::E6002,
            Self::IntegerOverflow { .. } => ErrorCode::E6003,
        }
    }

    fn primary_label(&self) -> &'static str {
        match self {
            Self::MalformedForm { .. } => "malformed form",
            Self::SpecialFormArity { .. } => "wrong number of operands",
            Self::ArityMismatch { .. } | Self::BuiltinArity { .. } => "wrong number of arguments",
            Self::OperatorNotFound { .. } => "not a function or built-in",
            Self::TypeMismatch { .. } => "wrong type",
            Self::IntegerOverflow { .. } => "overflows a 64-bit integer",
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedForm { form, reason } => write!(f, "malformed `{form}`: {reason}"),
            Self::SpecialFormArity {
                form,
                expected,
                got,
            } => write!(
                f,
                "`{form}` expects {expected} {}, {got} given",
                plural(expected.headline(), "operand")
            ),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "Function {name} expects {expected} {}, {got} given",
                plural(expected.headline(), "argument")
            ),
            Self::BuiltinArity {
                name,
                expected,
                got,
            } => write!(
                f,
                "built-in `{name}` expects {expected} {}, {got} given",
                plural(expected.headline(), "argument")
            ),
            Self::OperatorNotFound { name } => write!(f, "operator not found: {name}"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
        }
    }
}

/// One user-function call an error propagated out of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    pub name: String,
    pub call_span: Span,
}

/// A fatal evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
    /// Innermost call first.
    pub backtrace: Vec<CallFrame>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError {
            kind,
            span,
            backtrace: Vec::new(),
        }
    }

    /// Record that this error escaped the call to `name` at `call_span`.
    #[must_use]
    pub fn in_call(mut self, name: &str, call_span: Span) -> Self {
        self.backtrace.push(CallFrame {
            name: name.to_string(),
            call_span,
        });
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// Convert to a diagnostic for rendering.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.kind.primary_label());

        for frame in &self.backtrace {
            diag = diag.with_secondary_label(
                frame.call_span,
                format!("in this call to `{}`", frame.name),
            );
        }

        match &self.kind {
            EvalErrorKind::OperatorNotFound { name } => {
                let builtins = Builtin::ALL
                    .iter()
                    .map(|builtin| builtin.name())
                    .collect::<Vec<_>>()
                    .join(", ");
                diag = diag.with_note(format!(
                    "`{name}` is not defined with `defun` and is not one of: {builtins}"
                ));
            }
            EvalErrorKind::SpecialFormArity { expected, got, .. }
            | EvalErrorKind::ArityMismatch { expected, got, .. }
            | EvalErrorKind::BuiltinArity { expected, got, .. } => {
                diag = diag.with_note(format!("expected {expected}, found {got}"));
            }
            _ => {}
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}

// Constructors

pub(crate) fn malformed(form: &str, reason: impl Into<String>, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::MalformedForm {
            form: form.to_string(),
            reason: reason.into(),
        },
        span,
    )
}

pub(crate) fn special_form_arity(form: &str, expected: Arity, got: usize, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::SpecialFormArity {
            form: form.to_string(),
            expected,
            got,
        },
        span,
    )
}

pub(crate) fn arity_mismatch(name: &str, expected: Arity, got: usize, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::ArityMismatch {
            name: name.to_string(),
            expected,
            got,
        },
        span,
    )
}

pub(crate) fn builtin_arity(
    name: &'static str,
    expected: Arity,
    got: usize,
    span: Span,
) -> EvalError {
    EvalError::new(
        EvalErrorKind::BuiltinArity {
            name,
            expected,
            got,
        },
        span,
    )
}

pub(crate) fn operator_not_found(name: &str, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::OperatorNotFound {
            name: name.to_string(),
        },
        span,
    )
}

pub(crate) fn type_mismatch(expected: &'static str, got: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch { expected, got }, span)
}

pub(crate) fn integer_overflow(operation: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation }, span)
}
