//! Call-stack tracking for the interpreter.
//!
//! Every function call pushes a [`CallFrame`]; the depth check lives in
//! [`CallStack::push`]. When an error escapes a call, the live frames are
//! snapshotted into an [`EvalBacktrace`](crate::EvalBacktrace).

use little_ir::Span;

use crate::errors::recursion_limit;
use crate::{BacktraceFrame, EvalBacktrace, EvalError};

/// Default maximum number of nested calls.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// One live call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Name of the callee as written at the call site, or the function's
    /// own name when the head was not an identifier.
    pub name: String,
    /// Span of the call expression.
    pub call_span: Option<Span>,
}

#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame. The frame is not pushed if the limit is reached.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            return Err(recursion_limit(self.max_depth));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The innermost live call.
    pub fn current_frame(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    /// Snapshot of the live frames, innermost first.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: f.name.clone(),
                span: f.call_span,
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a snapshot unless the error already carries one.
    ///
    /// The first attachment happens at the innermost call, which sees the
    /// deepest stack; outer calls leave it alone.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if err.backtrace.is_some() || self.frames.is_empty() {
            return err;
        }
        let trace = self.capture();
        err.with_backtrace(trace)
    }
}

impl Default for CallStack {
    fn default() -> Self {
        CallStack::new(DEFAULT_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests;
