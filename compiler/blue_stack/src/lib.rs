//! Stack growth for deeply recursive Blue programs.
//!
//! The parser descends once per nesting level and the evaluator once per
//! AST node and per script-level call, so a recursive Blue function can
//! exhaust the native stack long before the script itself misbehaves.
//! Wrapping those recursion points in [`ensure_sufficient_stack`] moves the
//! limit from "native stack size" to "available memory".
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
