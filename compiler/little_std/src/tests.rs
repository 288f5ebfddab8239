use little_eval::{buffer_handler, EvalError, EvalErrorKind, EvalResult, Interpreter, Value};
use little_parse::parse;
use pretty_assertions::assert_eq;

use super::*;

fn run_with_output(source: &str) -> (EvalResult, String) {
    let handler = buffer_handler();
    let mut interp = Interpreter::builder()
        .print_handler(handler.clone())
        .max_depth(500)
        .build();
    let env = root_environment().unwrap();
    let node = parse(source).unwrap();
    let result = interp.eval(&env, &node);
    (result, handler.get_output())
}

fn run(source: &str) -> Value {
    run_with_output(source).0.unwrap()
}

fn show(source: &str) -> String {
    run(source).to_string()
}

fn run_err(source: &str) -> EvalError {
    run_with_output(source).0.unwrap_err()
}

#[test]
fn prelude_names_are_unique() {
    let names: Vec<&str> = prelude().into_iter().map(|(name, _)| name).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len());
    assert!(root_environment().is_ok());
}

#[test]
fn prelude_load_order() {
    let names: Vec<&str> = prelude().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names.first(), Some(&"and"));
    assert_eq!(names.last(), Some(&"set!"));
    let fn_pos = names.iter().position(|n| *n == "fn");
    let abs_pos = names.iter().position(|n| *n == "abs");
    assert!(abs_pos < fn_pos);
}

#[test]
fn literal_round_trip() {
    assert_eq!(show("42"), "42");
    assert_eq!(show("1.5"), "1.5");
    assert_eq!(show(r#""tab\there""#), r#""tab\there""#);
    assert_eq!(run(":one"), Value::string("one"));
}

#[test]
fn arithmetic() {
    assert_eq!(run("(+ 3 9)"), Value::Int(12));
    assert_eq!(run("(+ 1 2.5)"), Value::Float(3.5));
    assert_eq!(run("(- 10 4 3)"), Value::Int(3));
    assert_eq!(run("(- 4)"), Value::Int(-4));
    assert_eq!(run("(* 2 3 4)"), Value::Int(24));
    assert_eq!(run("(/ 7 2)"), Value::Float(3.5));
    assert_eq!(run("(abs (- 3))"), Value::Int(3));
    assert_eq!(run(r#"(+ "ab" "cd")"#), Value::string("abcd"));
    assert_eq!(show("(+ [1] [2 3])"), "[1, 2, 3]");
}

#[test]
fn arithmetic_errors() {
    assert_eq!(run_err("(/ 1 0)").kind, EvalErrorKind::DivisionByZero);
    assert_eq!(run_err("(/ 1 0.0)").kind, EvalErrorKind::DivisionByZero);
    assert_eq!(
        run_err("(* 9223372036854775807 2)").kind,
        EvalErrorKind::IntegerOverflow { operation: "*" }
    );
    assert!(matches!(
        run_err(r#"(+ 1 "a")"#).kind,
        EvalErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn error_span_points_at_failing_call() {
    let err = run_err("(+ 1\n  (/ 2 0))");
    let span = err.span.unwrap();
    assert_eq!((span.start.line, span.start.column), (2, 3));
}

#[test]
fn collection_literals() {
    assert_eq!(show("[3 4 5]"), "[3, 4, 5]");
    assert_eq!(
        show(r#"{:one 1 3 "hello" "five" 3.4}"#),
        r#"{"one": 1, 3: "hello", "five": 3.4}"#
    );
}

#[test]
fn closures() {
    assert_eq!(run("((fn '(a b) '(+ a b)) 1 2)"), Value::Int(3));
    for source in ["((fn '(a b) '(+ a b)) 1)", "((fn '(a b) '(+ a b)) 1 2 3)"] {
        assert!(matches!(
            run_err(source).kind,
            EvalErrorKind::ArityMismatch { got: 1 | 3, .. }
        ));
    }
}

#[test]
fn quoted_names_are_not_resolved() {
    assert!(run("'(+ 1 undefined_name)").as_quoted().is_some());
}

#[test]
fn scoping() {
    assert!(matches!(
        run_err("((fn '() '(def :inner '1))) inner").kind,
        EvalErrorKind::NotDefined { .. }
    ));
    assert_eq!(
        run("(def :x '1) ((fn '() '(set! :x '2))) x"),
        Value::Int(2)
    );
    assert_eq!(run("(def :x '1) ((fn '(x) 'x) 5)"), Value::Int(5));
    assert!(matches!(
        run_err("(def :x '1) (def :x '2)").kind,
        EvalErrorKind::AlreadyDefined { .. }
    ));
    assert!(matches!(
        run_err("(set! :nope '1)").kind,
        EvalErrorKind::NotDefined { .. }
    ));
}

#[test]
fn empty_forms() {
    assert_eq!(run_err("()").kind, EvalErrorKind::EmptyExpression);
    assert_eq!(run_err("").kind, EvalErrorKind::EmptyBlock);
}

#[test]
fn and_or_evaluate_every_operand() {
    let (result, output) = run_with_output(r#"(and false (print "a"))"#);
    assert_eq!(result.unwrap(), Value::Bool(false));
    assert_eq!(output, "a\n");

    let (result, output) = run_with_output(r#"(or true (print "b"))"#);
    assert_eq!(result.unwrap(), Value::Bool(true));
    assert_eq!(output, "b\n");
}

#[test]
fn if_runs_only_chosen_branch() {
    let (result, output) = run_with_output(r#"(if false '(print "no") '(print "yes"))"#);
    assert_eq!(result.unwrap(), Value::Nil);
    assert_eq!(output, "yes\n");
    assert_eq!(run("(if false 1)"), Value::Nil);
    assert_eq!(run("(if [1] :ok :bad)"), Value::string("ok"));
    assert!(matches!(
        run_err("(if 1 2 3 4)").kind,
        EvalErrorKind::ArityMismatch { .. }
    ));
}

#[test]
fn factorial() {
    let source = "
        (def :fact '(fn '(n)
          '(if (<= n 1)
             1
             '(* n (fact (- n 1))))))
        (fact 10)
    ";
    assert_eq!(run(source), Value::Int(3_628_800));
}

#[test]
fn unbounded_recursion_hits_limit() {
    let err = run_err("(def :forever '(fn '() '(forever))) (forever)");
    assert_eq!(err.kind, EvalErrorKind::RecursionLimit { depth: 500 });
    assert!(err.backtrace.is_some());
}

#[test]
fn comparisons() {
    assert_eq!(run("(< 1 2.5)"), Value::Bool(true));
    assert_eq!(run("(>= 2 2)"), Value::Bool(true));
    assert_eq!(run(r#"(< "a" "b")"#), Value::Bool(true));
    assert_eq!(run("(== 1 1.0)"), Value::Bool(true));
    assert_eq!(run("(!= [1] [1])"), Value::Bool(false));
    assert!(matches!(
        run_err(r#"(< 1 "a")"#).kind,
        EvalErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn truthiness_and_membership() {
    assert_eq!(run("(not nil)"), Value::Bool(true));
    assert_eq!(run("(all [1 true :x])"), Value::Bool(true));
    assert_eq!(run("(any [])"), Value::Bool(false));
    assert_eq!(run("(in 2 [1 2])"), Value::Bool(true));
    assert_eq!(run("(in :a {:a 1})"), Value::Bool(true));
    assert_eq!(run(r#"(in "ell" "hello")"#), Value::Bool(true));
}

#[test]
fn collections() {
    assert_eq!(show("(list 1 :a)"), r#"[1, "a"]"#);
    assert_eq!(show("(map [1 2 3] (fn '(x) '(* x x)))"), "[1, 4, 9]");
    assert_eq!(show("(filter [0 1 2] (fn '(x) 'x))"), "[1, 2]");
    assert_eq!(run(r#"(len "héllo")"#), Value::Int(5));
    assert_eq!(run("(len {:a 1})"), Value::Int(1));
    assert_eq!(run("(get [1 2 3] (- 1))"), Value::Int(3));
    assert_eq!(run("(get {:a 1} :a)"), Value::Int(1));
}

#[test]
fn lookup_errors() {
    assert_eq!(
        run_err("(get [1] 5)").kind,
        EvalErrorKind::IndexOutOfBounds { index: 5, len: 1 }
    );
    assert!(matches!(
        run_err("(get {:a 1} :b)").kind,
        EvalErrorKind::KeyNotFound { .. }
    ));
}

#[test]
fn get_in() {
    assert_eq!(run("(get-in {:a {:b [10 20]}} [:a :b 1])"), Value::Int(20));
    assert_eq!(run("(get-in {:a 1} [:missing :deeper])"), Value::Nil);
    assert_eq!(show("(get-in {:a 1} [])"), r#"{"a": 1}"#);
}

#[test]
fn console() {
    let (result, output) = run_with_output(r#"(print "hi" [1 "two"]) (dbg "x")"#);
    assert_eq!(result.unwrap(), Value::string("x"));
    assert_eq!(output, "hi [1, \"two\"]\n\"x\"\n");
}

#[test]
fn control() {
    assert_eq!(run("(do)"), Value::Nil);
    assert_eq!(run("(do 1 2)"), Value::Int(2));
    assert_eq!(run("(id :v)"), Value::string("v"));
    assert_eq!(run("(eval '(+ 1 2))"), Value::Int(3));
    assert_eq!(run("(eval 4)"), Value::Int(4));
    assert_eq!(run("(def :y '(+ 1 1))"), Value::Int(2));
}
