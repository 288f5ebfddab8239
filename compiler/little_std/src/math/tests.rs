use little_eval::{silent_handler, EvalErrorKind};
use pretty_assertions::assert_eq;

use super::*;

fn interp() -> Interpreter {
    Interpreter::builder().print_handler(silent_handler()).build()
}

#[test]
fn empty_sum_and_product() {
    assert_eq!(add(&mut interp(), Vec::new()).unwrap(), Value::Int(0));
    assert_eq!(mul(&mut interp(), Vec::new()).unwrap(), Value::Int(1));
}

#[test]
fn int_stays_int() {
    let result = add(&mut interp(), vec![Value::Int(2), Value::Int(3)]).unwrap();
    assert_eq!(result.type_name(), "int");
}

#[test]
fn float_contaminates() {
    let result = mul(&mut interp(), vec![Value::Int(2), Value::Float(1.5)]).unwrap();
    assert_eq!(result.type_name(), "float");
    assert_eq!(result, Value::Float(3.0));
}

#[test]
fn division_is_always_float() {
    let result = div(&mut interp(), vec![Value::Int(6), Value::Int(3)]).unwrap();
    assert_eq!(result.type_name(), "float");
    assert_eq!(result, Value::Float(2.0));
}

#[test]
fn overflow_is_reported() {
    let err = add(&mut interp(), vec![Value::Int(i64::MAX), Value::Int(1)]).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::IntegerOverflow { operation: "+" });
    let err = sub(&mut interp(), vec![Value::Int(i64::MIN)]).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::IntegerOverflow { operation: "-" });
    let err = abs(&mut interp(), vec![Value::Int(i64::MIN)]).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::IntegerOverflow { operation: "abs" });
}

#[test]
fn arity() {
    assert!(matches!(
        sub(&mut interp(), Vec::new()).unwrap_err().kind,
        EvalErrorKind::ArityMismatch { .. }
    ));
    assert!(matches!(
        div(&mut interp(), vec![Value::Int(1)]).unwrap_err().kind,
        EvalErrorKind::ArityMismatch { .. }
    ));
}

#[test]
fn mixed_concatenation_is_rejected() {
    let err = add(&mut interp(), vec![Value::string("a"), Value::Int(1)]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "str".to_string(),
            got: "int".to_string(),
        }
    );
}
