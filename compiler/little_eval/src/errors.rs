//! Runtime error types.
//!
//! `EvalErrorKind` is the structured category; free factory functions
//! (`not_defined()`, `arity_mismatch()`, ...) are the way errors are built.
//! The evaluator fills in the span of the failing node and, when the error
//! crosses a call boundary, a backtrace of the active frames.

use std::fmt;

use little_diagnostic::{Diagnostic, ErrorCode};
use little_ir::Span;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// How many arguments a callable accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    /// Inclusive on both ends.
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, n: usize) -> bool {
        match self {
            Arity::Exactly(k) => n == k,
            Arity::Range(lo, hi) => (lo..=hi).contains(&n),
            Arity::AtLeast(lo) => n >= lo,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Exactly(1) => write!(f, "1 argument"),
            Arity::Exactly(n) => write!(f, "{n} arguments"),
            Arity::Range(lo, hi) => write!(f, "{lo} to {hi} arguments"),
            Arity::AtLeast(1) => write!(f, "at least 1 argument"),
            Arity::AtLeast(n) => write!(f, "at least {n} arguments"),
        }
    }
}

/// Typed runtime error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Environment
    #[error("`{name}` is not defined")]
    NotDefined { name: String },
    #[error("`{name}` is already defined in this scope")]
    AlreadyDefined { name: String },

    // Evaluation
    #[error("cannot evaluate an empty expression")]
    EmptyExpression,
    #[error("cannot evaluate an empty block")]
    EmptyBlock,
    #[error("a value of type `{type_name}` is not callable")]
    NotCallable { type_name: &'static str },
    #[error("`{name}` expects {expected}, got {got}")]
    ArityMismatch {
        name: String,
        expected: Arity,
        got: usize,
    },
    #[error("map has {children} forms; keys and values must pair up")]
    MalformedMap { children: usize },
    #[error("call depth limit of {depth} exceeded")]
    RecursionLimit { depth: usize },

    // Host functions
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },
    #[error("invalid parameter {found}; parameters must be identifiers")]
    InvalidParameter { found: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("key {key} not found")]
    KeyNotFound { key: String },
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
}

/// One active call at the moment an error was raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub name: String,
    pub span: Option<Span>,
}

/// Active calls at the error site, innermost first.
///
/// Deep recursion would make the trace unreadable, so only the innermost
/// [`EvalBacktrace::MAX_FRAMES`] are kept and the rest are counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
    omitted: usize,
}

impl EvalBacktrace {
    pub const MAX_FRAMES: usize = 32;

    /// Build from frames ordered innermost first.
    pub fn new(mut frames: Vec<BacktraceFrame>) -> Self {
        let omitted = frames.len().saturating_sub(Self::MAX_FRAMES);
        frames.truncate(Self::MAX_FRAMES);
        EvalBacktrace { frames, omitted }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    /// Frames dropped past [`EvalBacktrace::MAX_FRAMES`].
    pub fn omitted(&self) -> usize {
        self.omitted
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            write!(f, "  {i}: {}", frame.name)?;
            if let Some(span) = frame.span {
                write!(f, " at {span}")?;
            }
            writeln!(f)?;
        }
        if self.omitted > 0 {
            writeln!(f, "  ... {} more", self.omitted)?;
        }
        Ok(())
    }
}

/// A runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// The innermost node that failed, once the evaluator knows it.
    pub span: Option<Span>,
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            backtrace: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Set the span unless a more precise one is already recorded.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::NotDefined { .. } => ErrorCode::E6001,
            EvalErrorKind::AlreadyDefined { .. } => ErrorCode::E6002,
            EvalErrorKind::EmptyExpression => ErrorCode::E6003,
            EvalErrorKind::EmptyBlock => ErrorCode::E6004,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6005,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6006,
            EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6007,
            EvalErrorKind::InvalidParameter { .. } => ErrorCode::E6008,
            EvalErrorKind::DivisionByZero => ErrorCode::E6009,
            EvalErrorKind::IndexOutOfBounds { .. } => ErrorCode::E6010,
            EvalErrorKind::KeyNotFound { .. } => ErrorCode::E6011,
            EvalErrorKind::RecursionLimit { .. } => ErrorCode::E6012,
            EvalErrorKind::MalformedMap { .. } => ErrorCode::E6013,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6014,
        }
    }

    /// Convert for rendering. Backtrace frames become notes.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        if let Some(span) = self.span {
            let label = match self.kind {
                EvalErrorKind::NotDefined { .. } => "not found in this scope",
                EvalErrorKind::NotCallable { .. } => "called here",
                EvalErrorKind::RecursionLimit { .. } => "limit reached in this call",
                _ => "error raised here",
            };
            diag = diag.with_label(span, label);
        }
        if let Some(trace) = &self.backtrace {
            for frame in trace.frames() {
                diag = match frame.span {
                    Some(span) => diag.with_note(format!("in `{}` called at {span}", frame.name)),
                    None => diag.with_note(format!("in `{}`", frame.name)),
                };
            }
            if trace.omitted() > 0 {
                diag = diag.with_note(format!("... and {} more calls", trace.omitted()));
            }
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Factories

#[cold]
pub fn not_defined(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::NotDefined {
        name: name.to_string(),
    })
}

#[cold]
pub fn already_defined(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::AlreadyDefined {
        name: name.to_string(),
    })
}

#[cold]
pub fn empty_expression() -> EvalError {
    EvalError::new(EvalErrorKind::EmptyExpression)
}

#[cold]
pub fn empty_block() -> EvalError {
    EvalError::new(EvalErrorKind::EmptyBlock)
}

#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: Arity, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn malformed_map(children: usize) -> EvalError {
    EvalError::new(EvalErrorKind::MalformedMap { children })
}

#[cold]
pub fn recursion_limit(depth: usize) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimit { depth })
}

/// `expected` describes what was wanted; the actual value's type is reported.
#[cold]
pub fn type_mismatch(expected: &str, got: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.type_name().to_string(),
    })
}

#[cold]
pub fn invalid_parameter(found: impl fmt::Display) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidParameter {
        found: found.to_string(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::new(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn key_not_found(key: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::KeyNotFound {
        key: key.to_string(),
    })
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation })
}
