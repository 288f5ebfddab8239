//! Stack growth for deep recursion.
//!
//! The reader recurses once per nested bracket and the evaluator once per
//! nested node and per call. Both wrap their recursive step in
//! [`ensure_sufficient_stack`], so a source like `((((...))))` nested thousands
//! deep, or a user function recursing up to the interpreter's call limit, runs
//! on a heap-allocated stack segment instead of overflowing the thread stack.
//!
//! On `wasm32` the wrapper is a plain call.

/// Grow once less than this much stack remains.
///
/// An evaluator step (node dispatch plus a builtin call) uses a few KB, so
/// this leaves headroom for several of them between checks.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
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
