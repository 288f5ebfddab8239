//! Syntax error types.

use little_diagnostic::{Diagnostic, ErrorCode};
use little_ir::Span;

/// What the reader tripped over.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    #[error("unexpected character `{found}`")]
    UnexpectedToken { found: char },

    #[error("expected {expected}")]
    ExpectedToken { expected: &'static str },

    #[error("invalid number `{text}`")]
    InvalidNumber { text: String },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("map literal has a key without a value")]
    MissingMapValue,
}

/// A syntax error with the span of the offending text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

impl SyntaxError {
    #[cold]
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        SyntaxError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            SyntaxErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            SyntaxErrorKind::ExpectedToken { .. } => ErrorCode::E1002,
            SyntaxErrorKind::InvalidNumber { .. } => ErrorCode::E1003,
            SyntaxErrorKind::UnexpectedEof => ErrorCode::E1004,
            SyntaxErrorKind::MissingMapValue => ErrorCode::E1005,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            SyntaxErrorKind::UnexpectedToken { .. } => "not valid here",
            SyntaxErrorKind::ExpectedToken { .. } => "expected here",
            SyntaxErrorKind::InvalidNumber { .. } => "invalid number",
            SyntaxErrorKind::UnexpectedEof => "input ends inside this string",
            SyntaxErrorKind::MissingMapValue => "odd number of forms",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        match self.kind {
            SyntaxErrorKind::MissingMapValue => {
                diag.with_note("every key in `{...}` must be followed by a value")
            }
            SyntaxErrorKind::InvalidNumber { .. } => {
                diag.with_note("numbers take at most one `.` and must fit in 64 bits")
            }
            _ => diag,
        }
    }
}
