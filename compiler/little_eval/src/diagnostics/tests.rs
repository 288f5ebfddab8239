use little_ir::{Position, Span};
use pretty_assertions::assert_eq;

use super::*;
use crate::errors::{division_by_zero, not_defined};
use crate::EvalErrorKind;

fn frame(name: &str) -> CallFrame {
    CallFrame {
        name: name.to_string(),
        call_span: None,
    }
}

#[test]
fn push_and_pop_track_depth() {
    let mut stack = CallStack::new(4);
    assert!(stack.is_empty());
    assert!(stack.push(frame("a")).is_ok());
    assert!(stack.push(frame("b")).is_ok());
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.current_frame().map(|f| f.name.as_str()), Some("b"));
    stack.pop();
    assert_eq!(stack.depth(), 1);
}

#[test]
fn push_past_limit_fails_without_pushing() {
    let mut stack = CallStack::new(2);
    assert!(stack.push(frame("a")).is_ok());
    assert!(stack.push(frame("b")).is_ok());
    let err = stack.push(frame("c"));
    assert!(matches!(
        err,
        Err(EvalError {
            kind: EvalErrorKind::RecursionLimit { depth: 2 },
            ..
        })
    ));
    assert_eq!(stack.depth(), 2);
}

#[test]
fn default_limit() {
    assert_eq!(CallStack::default().max_depth(), DEFAULT_MAX_DEPTH);
}

#[test]
fn capture_is_innermost_first() {
    let mut stack = CallStack::new(8);
    let span = Span::point(Position::new(4, 1, 5));
    assert!(stack.push(frame("outer")).is_ok());
    assert!(stack
        .push(CallFrame {
            name: "inner".to_string(),
            call_span: Some(span),
        })
        .is_ok());
    let trace = stack.capture();
    let names: Vec<&str> = trace.frames().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["inner", "outer"]);
    assert_eq!(trace.frames()[0].span, Some(span));
}

#[test]
fn attach_skips_empty_stack() {
    let stack = CallStack::new(8);
    assert!(stack.attach_backtrace(division_by_zero()).backtrace.is_none());
}

#[test]
fn attach_keeps_existing_backtrace() {
    let mut stack = CallStack::new(8);
    assert!(stack.push(frame("deep")).is_ok());
    let err = stack.attach_backtrace(not_defined("x"));
    stack.pop();
    assert!(stack.push(frame("shallow")).is_ok());
    let err = stack.attach_backtrace(err);
    let trace = err.backtrace.unwrap_or_else(|| EvalBacktrace::new(Vec::new()));
    assert_eq!(trace.frames()[0].name, "deep");
}
