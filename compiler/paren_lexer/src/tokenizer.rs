//! Tokenizer (splitter).
//!
//! Given a fragment that starts with `(` and ends with its matching `)`,
//! the splitter strips the outer pair and scans the interior left to right:
//!
//! - `(` emits the whole nested fragment as one [`TokenTree::List`]
//!   (recursively split) and jumps past its `)`
//! - an unescaped `"` emits the whole quoted string, quotes included, as one
//!   [`TokenTree::Str`] and jumps past the closing quote
//! - whitespace (space, tab, newline, carriage return) ends the pending leaf
//! - anything else extends the pending leaf
//!
//! The end of the fragment flushes whatever leaf is still pending.

use memchr::memchr;
use paren_ir::{Span, TokenList, TokenTree};
use paren_stack::ensure_sufficient_stack;

use crate::delimiters::is_escaped_quote;
use crate::{DelimiterMap, LexError, LexErrorKind};

/// Tokenize every top-level form of `source`.
///
/// Text between top-level forms is skipped, the way a loader looking only
/// for `(` would skip it.
pub fn tokenize(source: &str) -> Result<Vec<TokenList>, LexError> {
    let map = DelimiterMap::build(source)?;
    let bytes = source.as_bytes();
    let mut forms = Vec::new();
    let mut pos = 0;

    while let Some(offset) = memchr(b'(', bytes.get(pos..).unwrap_or_default()) {
        let open = pos + offset;
        note_skipped(source, pos, open);
        match map.paren_close(open) {
            Some(close) => {
                forms.push(split_fragment(source, &map, open, close)?);
                pos = close + 1;
            }
            // A `(` the matcher never recorded sits inside a string literal.
            None => pos = open + 1,
        }
    }
    note_skipped(source, pos, source.len());

    tracing::debug!(forms = forms.len(), "tokenized source");
    Ok(forms)
}

/// Split the fragment `source[open..=close]` into a token list.
///
/// `open` must be a `(` whose match in `map` is `close`.
pub fn split_fragment(
    source: &str,
    map: &DelimiterMap,
    open: usize,
    close: usize,
) -> Result<TokenList, LexError> {
    ensure_sufficient_stack(|| {
        let bytes = source.as_bytes();
        let mut children = Vec::new();
        let mut leaf_start: Option<usize> = None;
        let mut i = open + 1;

        while i < close {
            match bytes[i] {
                b'(' => {
                    flush_leaf(&mut children, &mut leaf_start, i)?;
                    let end = map
                        .paren_close(i)
                        .ok_or_else(|| unmatched('(', i))?;
                    children.push(TokenTree::List(split_fragment(source, map, i, end)?));
                    i = end + 1;
                }
                b'"' if !is_escaped_quote(bytes, i) => {
                    flush_leaf(&mut children, &mut leaf_start, i)?;
                    let end = map.quote_close(i).ok_or_else(|| unmatched('"', i))?;
                    children.push(TokenTree::Str(span(i, end + 1)?));
                    i = end + 1;
                }
                b' ' | b'\t' | b'\n' | b'\r' => {
                    flush_leaf(&mut children, &mut leaf_start, i)?;
                    i += 1;
                }
                _ => {
                    if leaf_start.is_none() {
                        leaf_start = Some(i);
                    }
                    i += 1;
                }
            }
        }
        flush_leaf(&mut children, &mut leaf_start, close)?;

        Ok(TokenList::new(span(open, close + 1)?, children))
    })
}

/// Emit the pending leaf `[start, end)` if there is one.
fn flush_leaf(
    children: &mut Vec<TokenTree>,
    leaf_start: &mut Option<usize>,
    end: usize,
) -> Result<(), LexError> {
    if let Some(start) = leaf_start.take() {
        children.push(TokenTree::Atom(span(start, end)?));
    }
    Ok(())
}

fn span(start: usize, end: usize) -> Result<Span, LexError> {
    Span::try_from_range(start..end).map_err(|_| {
        LexError::new(
            LexErrorKind::SourceTooLarge { len: end },
            Span::DUMMY,
        )
    })
}

fn unmatched(delimiter: char, pos: usize) -> LexError {
    LexError::new(
        LexErrorKind::UnmatchedDelimiter { delimiter },
        Span::try_from_range(pos..pos + 1).unwrap_or(Span::DUMMY),
    )
}

/// Log top-level text that is not part of any form.
fn note_skipped(source: &str, from: usize, to: usize) {
    let skipped = source.get(from..to).unwrap_or_default().trim();
    if !skipped.is_empty() {
        tracing::debug!(start = from, end = to, "skipping text outside of any form");
    }
}
