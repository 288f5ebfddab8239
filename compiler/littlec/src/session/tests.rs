use little_eval::{buffer_handler, EvalErrorKind};
use little_parse::SyntaxErrorKind;
use pretty_assertions::assert_eq;

use super::*;

fn session() -> (Session, SharedPrintHandler) {
    let handler = buffer_handler();
    let session = Session::builder()
        .print_handler(handler.clone())
        .build()
        .unwrap();
    (session, handler)
}

#[test]
fn definitions_persist_between_calls() {
    let (mut s, _) = session();
    s.exec("(def :x '40)").unwrap();
    assert_eq!(s.exec("(+ x 2)").unwrap(), Value::Int(42));
    assert!(s.env().contains_local("x"));
}

#[test]
fn syntax_error_is_reported() {
    let (mut s, _) = session();
    let err = s.exec("{:a}").unwrap_err();
    assert!(matches!(
        err,
        LittleError::Syntax(SyntaxError {
            kind: SyntaxErrorKind::MissingMapValue,
            ..
        })
    ));
    assert!(err.to_diagnostic().is_some());
}

#[test]
fn exec_each_continues_after_runtime_error() {
    let (mut s, handler) = session();
    let results = s
        .exec_each(r#"(print "a") missing (print "b")"#)
        .unwrap();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(
        &results[1],
        Err(EvalError {
            kind: EvalErrorKind::NotDefined { .. },
            ..
        })
    ));
    assert!(results[2].is_ok());
    assert_eq!(handler.get_output(), "a\nb\n");
}

#[test]
fn exec_each_evaluates_nothing_on_syntax_error() {
    let (mut s, handler) = session();
    assert!(s.exec_each(r#"(print "a") )"#).is_err());
    assert_eq!(handler.get_output(), "");
}

#[test]
fn max_depth_is_applied() {
    let mut s = Session::builder()
        .print_handler(buffer_handler())
        .max_depth(20)
        .build()
        .unwrap();
    let err = s.exec("(def :f '(fn '() '(f))) (f)").unwrap_err();
    assert!(matches!(
        err,
        LittleError::Eval(EvalError {
            kind: EvalErrorKind::RecursionLimit { depth: 20 },
            ..
        })
    ));
    assert_eq!(s.interpreter().call_stack().max_depth(), 20);
}

#[test]
fn io_error_has_no_diagnostic() {
    let err = LittleError::Io {
        path: "missing.lil".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.to_diagnostic().is_none());
    assert_eq!(err.to_string(), "cannot read `missing.lil`: not found");
}
