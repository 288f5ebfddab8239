//! Diagnostic Emitters
//!
//! Emitters implement [`DiagnosticEmitter`]. The terminal emitter renders
//! human-readable output with optional ANSI colors and a source snippet.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}
