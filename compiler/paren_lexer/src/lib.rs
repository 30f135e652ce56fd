//! Paren Lexer - delimiter matching and tokenization.
//!
//! Two passes over the source text:
//!
//! 1. [`DelimiterMap::build`] scans the whole buffer once and records every
//!    matching `(`/`)` pair and `"`/`"` pair. Parentheses inside string
//!    literals are ignored; a `"` preceded by `\` is not a delimiter.
//! 2. [`tokenize`] walks each top-level form and splits it into a
//!    [`TokenList`](paren_ir::TokenList), recursing into nested parentheses
//!    via the map from step 1.
//!
//! Tokens are spans into the original buffer, never copied substrings.

mod delimiters;
mod lex_error;
mod tokenizer;

pub use delimiters::{is_escaped_quote, DelimiterMap};
pub use lex_error::{LexError, LexErrorKind};
pub use tokenizer::{split_fragment, tokenize};
