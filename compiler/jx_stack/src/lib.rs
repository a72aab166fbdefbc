//! Stack growth for recursive tree walks.
//!
//! The parser, the type resolver and the C# writer all recurse once per
//! nesting level of a Java expression. Machine-generated sources (long
//! string concatenations, deeply parenthesized constants) can nest far deeper
//! than the default thread stack allows, so every recursive entry point goes
//! through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`. On
//! `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn write_expr(&mut self, id: ExprId) -> Result<(), TranslateError> {
///     ensure_sufficient_stack(|| self.write_expr_inner(id))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` has no growable stack; call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
