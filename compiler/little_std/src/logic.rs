//! Truthiness, comparison and membership.
//!
//! `and` and `or` are ordinary functions: every operand has been evaluated
//! before they run.

use std::cmp::Ordering;

use little_eval::{type_mismatch, BuiltinFn, EvalError, EvalResult, Interpreter, Value};

use crate::args::{elements, expect_args};
use crate::number::Number;

pub(crate) const BUILTINS: &[(&str, BuiltinFn)] = &[
    ("and", and),
    ("or", or),
    ("all", all),
    ("any", any),
    ("not", not),
    ("==", eq),
    ("!=", ne),
    ("<", lt),
    (">", gt),
    ("<=", le),
    (">=", ge),
    ("in", contains),
];

fn and(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    Ok(Value::Bool(args.iter().all(Value::is_truthy)))
}

fn or(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    Ok(Value::Bool(args.iter().any(Value::is_truthy)))
}

fn all(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [coll] = expect_args("all", args)?;
    Ok(Value::Bool(elements(&coll)?.iter().all(Value::is_truthy)))
}

fn any(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [coll] = expect_args("any", args)?;
    Ok(Value::Bool(elements(&coll)?.iter().any(Value::is_truthy)))
}

fn not(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [value] = expect_args("not", args)?;
    Ok(Value::Bool(!value.is_truthy()))
}

fn eq(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [a, b] = expect_args("==", args)?;
    Ok(Value::Bool(a == b))
}

fn ne(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [a, b] = expect_args("!=", args)?;
    Ok(Value::Bool(a != b))
}

/// Numbers compare numerically, strings lexically; anything else is a type
/// error. NaN compares false against everything.
fn ordering(a: &Value, b: &Value) -> Result<Option<Ordering>, EvalError> {
    if let (Some(x), Some(y)) = (Number::of(a), Number::of(b)) {
        return Ok(x.compare(y));
    }
    match (a, b) {
        (Value::Str(x), Value::Str(y)) => Ok(Some(x.as_str().cmp(y.as_str()))),
        (Value::Str(_), other) => Err(type_mismatch("str", other)),
        (other, _) if Number::of(other).is_none() => Err(type_mismatch("number or str", other)),
        (_, other) => Err(type_mismatch("number", other)),
    }
}

fn compare(name: &str, args: Vec<Value>, accept: fn(Ordering) -> bool) -> EvalResult {
    let [a, b] = expect_args(name, args)?;
    Ok(Value::Bool(ordering(&a, &b)?.is_some_and(accept)))
}

fn lt(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    compare("<", args, Ordering::is_lt)
}

fn gt(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    compare(">", args, Ordering::is_gt)
}

fn le(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    compare("<=", args, Ordering::is_le)
}

fn ge(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    compare(">=", args, Ordering::is_ge)
}

/// `(in x coll)`: list membership, map key, or substring.
fn contains(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [needle, haystack] = expect_args("in", args)?;
    let found = match &haystack {
        Value::List(items) => items.contains(&needle),
        Value::Map(map) => map.contains_key(&needle),
        Value::Str(s) => {
            let sub = needle.as_str().ok_or_else(|| type_mismatch("str", &needle))?;
            s.contains(sub)
        }
        other => return Err(type_mismatch("list, map or str", other)),
    };
    Ok(Value::Bool(found))
}
