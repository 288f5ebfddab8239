//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support. When the
//! source text is attached, each primary label is shown under the line it
//! points at.

use std::io::{self, Write};

use little_ir::Span;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text so labels can be rendered as snippets.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_label(&mut self, label: &Label) {
        let snippet = self
            .source
            .as_deref()
            .and_then(|src| snippet_line(src, label.span));

        match snippet {
            Some((line_text, caret_col, caret_len)) => {
                let line_no = label.span.start.line.to_string();
                let gutter = " ".repeat(line_no.len());
                let _ = writeln!(self.writer, "{gutter}--> {}", label.span.start);
                let _ = writeln!(self.writer, "{gutter} |");
                let _ = writeln!(self.writer, "{line_no} | {line_text}");
                let _ = write!(self.writer, "{gutter} | {}", " ".repeat(caret_col));
                self.write_colored(&"^".repeat(caret_len), colors::ERROR);
                if !label.message.is_empty() {
                    let _ = write!(self.writer, " ");
                    self.write_colored(&label.message, colors::ERROR);
                }
                let _ = writeln!(self.writer);
            }
            None => {
                let _ = write!(self.writer, "  --> {}: ", label.span.start);
                self.write_colored(&label.message, colors::ERROR);
                let _ = writeln!(self.writer);
            }
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

/// The source line a span starts on, with the caret offset and width (both in
/// characters). Spans running past the line are underlined to its end.
fn snippet_line(source: &str, span: Span) -> Option<(&str, usize, usize)> {
    let index = usize::try_from(span.start.line).ok()?.checked_sub(1)?;
    let line = source.lines().nth(index)?;
    let line_chars = line.chars().count();
    let caret_col = usize::try_from(span.start.column).ok()?.saturating_sub(1);
    let caret_len = if span.end.line == span.start.line {
        usize::try_from(span.end.column.saturating_sub(span.start.column)).ok()?
    } else {
        line_chars.saturating_sub(caret_col)
    };
    Some((line, caret_col.min(line_chars), caret_len.max(1)))
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
