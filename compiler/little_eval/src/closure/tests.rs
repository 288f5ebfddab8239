use little_ir::{Position, Span};
use pretty_assertions::assert_eq;

use super::*;
use crate::{silent_handler, EvalErrorKind, FunctionValue};

fn ident(name: &str) -> Node {
    Node::new(
        NodeKind::Identifier(name.to_string()),
        Span::point(Position::START),
    )
}

fn quoted(kind: NodeKind, env: &Environment) -> Value {
    Value::quoted(
        Rc::new(Node::new(kind, Span::point(Position::START))),
        env.clone(),
    )
}

fn interp() -> Interpreter {
    Interpreter::builder().print_handler(silent_handler()).build()
}

#[test]
fn builds_from_quoted_expression() {
    let env = Environment::new();
    let params = quoted(NodeKind::Expression(vec![ident("a"), ident("b")]), &env);
    let body = quoted(NodeKind::Identifier("a".to_string()), &env);
    let Ok(Value::Function(FunctionValue::Closure(closure))) =
        fn_builtin(&mut interp(), vec![params, body])
    else {
        panic!("expected a closure");
    };
    assert_eq!(closure.params(), ["a".to_string(), "b".to_string()]);
    assert!(closure.env().ptr_eq(&env));
    assert_eq!(closure.body().as_identifier(), Some("a"));
}

#[test]
fn builds_from_string_list() {
    let env = Environment::new();
    let params = Value::list(vec![Value::string("x")]);
    let body = quoted(NodeKind::Identifier("x".to_string()), &env);
    let func = fn_builtin(&mut interp(), vec![params, body]);
    assert_eq!(
        func.map(|f| f.to_string()).ok(),
        Some("<fn (x)>".to_string())
    );
}

#[test]
fn rejects_wrong_argument_count() {
    let err = fn_builtin(&mut interp(), vec![Value::Nil]).err().map(|e| e.kind);
    assert_eq!(
        err,
        Some(EvalErrorKind::ArityMismatch {
            name: "fn".to_string(),
            expected: Arity::Exactly(2),
            got: 1,
        })
    );
}

#[test]
fn rejects_non_collection_params() {
    let env = Environment::new();
    let body = quoted(NodeKind::Identifier("x".to_string()), &env);
    let err = fn_builtin(&mut interp(), vec![Value::Int(1), body.clone()]).err();
    assert!(matches!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::TypeMismatch { .. })
    ));

    let quoted_ident = quoted(NodeKind::Identifier("x".to_string()), &env);
    let err = fn_builtin(&mut interp(), vec![quoted_ident, body]).err();
    assert!(matches!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::InvalidParameter { .. })
    ));
}

#[test]
fn invoke_uses_fresh_scope_per_call() {
    let env = Environment::new();
    let body = Rc::new(ident("a"));
    let closure = Closure::new(vec!["a".to_string()], body, env.clone());
    let mut interp = interp();
    assert_eq!(closure.invoke(&mut interp, vec![Value::Int(1)]).ok(), Some(Value::Int(1)));
    assert_eq!(closure.invoke(&mut interp, vec![Value::Int(2)]).ok(), Some(Value::Int(2)));
    assert!(!env.contains_local("a"));
}
