//! Diagnostic system for error reporting.
//!
//! Every fatal condition in the interpreter (unbalanced delimiters, bad
//! integer literals, arity mismatches, unknown operators, type errors) is
//! turned into a [`Diagnostic`] carrying:
//! - an error code for searchability (`paren --explain E2004`)
//! - a message saying what went wrong
//! - a primary label pointing at the offending source range
//! - notes with the expected/actual details

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
