//! Paren IR - shared data structures for the Paren interpreter.
//!
//! This crate contains the types every phase agrees on:
//! - [`Span`] for source locations (byte ranges into the original buffer)
//! - [`TokenTree`] / [`TokenList`] for tokenizer output
//! - [`Node`] / [`Block`] / [`Program`] for the AST
//!
//! # Design Philosophy
//!
//! - **Views, not copies**: tokens are spans into the source text; lexemes
//!   are borrowed back out with [`Span::slice`].
//! - **One block per parenthesized expression**: the AST mirrors the
//!   source nesting exactly.
//! - **Nesting depth is bounded by memory**: the nested trees drop through a
//!   heap work-list, and cloning or printing them grows the stack on demand.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{Block, Node, NodeKind, Program};
pub use span::{Span, SpanError};
pub use token::{DisplayTokens, TokenList, TokenTree};
