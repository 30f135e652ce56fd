//! Stack safety utilities for deep recursion.
//!
//! The tokenizer, the AST builder and the evaluator all recurse once per
//! nesting level, and user functions recurse once per call. Wrapping those
//! recursive steps in [`ensure_sufficient_stack`] grows the stack on demand
//! instead of overflowing on deeply nested programs.
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// ```text
/// fn eval_block(&mut self, block: &Block, scope: &Scope) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_block_inner(block, scope))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
