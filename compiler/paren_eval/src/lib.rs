#![deny(clippy::arithmetic_side_effects)]
//! Paren Eval - tree-walking evaluator for Paren programs.
//!
//! # Architecture
//!
//! - [`Interpreter`]: dispatches blocks to special forms, user functions
//!   and built-ins
//! - [`Environment`]: global variables and the `defun` function table
//! - [`Scope`]: call-local parameter bindings, fresh per call
//! - [`Value`]: closed set of runtime values
//! - [`PrintHandlerImpl`]: where `write-line` output goes
//!
//! Evaluation is single-threaded and synchronous. Every error is fatal and
//! is returned as an [`EvalError`] carrying a span and error code.

mod environment;
pub mod errors;
pub mod interpreter;
mod print_handler;
mod value;

pub use environment::{Environment, FunctionDef, Scope};
pub use errors::{Arity, CallFrame, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Builtin, Interpreter};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;
