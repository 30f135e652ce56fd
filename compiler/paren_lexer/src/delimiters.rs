//! Bracket/quote matcher.
//!
//! One left-to-right pass over the source builds two index maps:
//! opening `(` → matching `)`, and opening `"` → closing `"`. Parentheses
//! are matched with a stack (last opened, first closed). While a string is
//! open (odd count of unescaped quotes so far) parentheses are ignored.
//!
//! Only the three delimiter bytes matter to this pass, so it jumps between
//! them with `memchr3` instead of visiting every byte.

use memchr::memchr3_iter;
use paren_ir::Span;
use rustc_hash::FxHashMap;

use crate::{LexError, LexErrorKind};

/// Matching delimiter positions for one source buffer.
///
/// All positions are byte offsets into the buffer the map was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DelimiterMap {
    parens: FxHashMap<usize, usize>,
    quotes: FxHashMap<usize, usize>,
}

/// `true` if the `"` at `pos` is preceded by a backslash.
///
/// The backslash itself is left in place; it only stops the quote from
/// acting as a delimiter.
#[inline]
pub fn is_escaped_quote(bytes: &[u8], pos: usize) -> bool {
    pos > 0 && bytes.get(pos - 1) == Some(&b'\\')
}

impl DelimiterMap {
    /// Scan `source` and match every delimiter.
    ///
    /// # Errors
    ///
    /// - `UnexpectedCloseParen` for a `)` with nothing open
    /// - `UnterminatedString` for a `"` never closed
    /// - `UnclosedParen` for a `(` never closed (innermost reported)
    pub fn build(source: &str) -> Result<Self, LexError> {
        let len = source.len();
        if u32::try_from(len).is_err() {
            return Err(LexError::new(
                LexErrorKind::SourceTooLarge { len },
                Span::DUMMY,
            ));
        }

        let bytes = source.as_bytes();
        let mut map = DelimiterMap::default();
        let mut open_parens: Vec<usize> = Vec::new();
        let mut open_quote: Option<usize> = None;

        for pos in memchr3_iter(b'(', b')', b'"', bytes) {
            match bytes[pos] {
                b'"' => {
                    if is_escaped_quote(bytes, pos) {
                        continue;
                    }
                    match open_quote.take() {
                        Some(start) => {
                            map.quotes.insert(start, pos);
                        }
                        None => open_quote = Some(pos),
                    }
                }
                // Parentheses inside a string literal are plain text.
                _ if open_quote.is_some() => {}
                b'(' => open_parens.push(pos),
                _ => {
                    let Some(open) = open_parens.pop() else {
                        return Err(LexError::new(
                            LexErrorKind::UnexpectedCloseParen,
                            byte_span(pos),
                        ));
                    };
                    map.parens.insert(open, pos);
                }
            }
        }

        if let Some(start) = open_quote {
            return Err(LexError::new(
                LexErrorKind::UnterminatedString,
                span_between(start, len),
            ));
        }
        if let Some(&open) = open_parens.last() {
            return Err(LexError::new(LexErrorKind::UnclosedParen, byte_span(open)));
        }

        tracing::trace!(
            parens = map.paren_count(),
            quotes = map.quote_count(),
            "delimiters matched"
        );
        Ok(map)
    }

    /// Position of the `)` matching the `(` at `open`.
    #[inline]
    pub fn paren_close(&self, open: usize) -> Option<usize> {
        self.parens.get(&open).copied()
    }

    /// Position of the `"` closing the string opened at `open`.
    #[inline]
    pub fn quote_close(&self, open: usize) -> Option<usize> {
        self.quotes.get(&open).copied()
    }

    pub fn paren_count(&self) -> usize {
        self.parens.len()
    }

    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }
}

/// One-byte span at `pos`. Callers have already checked the buffer fits `u32`.
#[inline]
fn byte_span(pos: usize) -> Span {
    span_between(pos, pos + 1)
}

#[inline]
fn span_between(start: usize, end: usize) -> Span {
    Span::try_from_range(start..end).unwrap_or(Span::DUMMY)
}

#[cfg(test)]
mod tests;
