//! Diagnostic system for Little.
//!
//! Every failure the reader or the evaluator can report maps onto a
//! [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability (`little explain E6001`)
//! - a message saying what went wrong
//! - a primary label saying where
//! - optional notes (for runtime errors, the call backtrace)
//!
//! Rendering is done by a [`DiagnosticEmitter`]; the only emitter shipped is
//! the [`TerminalEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
