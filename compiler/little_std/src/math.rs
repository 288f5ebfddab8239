//! Arithmetic: `+ - * / abs`.
//!
//! Integer operations stay integral and are checked; any float operand
//! makes the result a float. `+` also concatenates strings and lists.

use little_eval::{
    division_by_zero, integer_overflow, type_mismatch, Arity, BuiltinFn, EvalError, EvalResult,
    Interpreter, Value,
};

use crate::args::{expect_args, expect_arity};
use crate::number::Number;

pub(crate) const BUILTINS: &[(&str, BuiltinFn)] = &[
    ("+", add),
    ("-", sub),
    ("*", mul),
    ("/", div),
    ("abs", abs),
];

fn numbers(args: &[Value]) -> Result<Vec<Number>, EvalError> {
    args.iter()
        .map(|v| Number::of(v).ok_or_else(|| type_mismatch("number", v)))
        .collect()
}

/// Left fold with checked integer and plain float steps.
fn fold(
    operation: &'static str,
    first: Number,
    rest: &[Number],
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Number, EvalError> {
    rest.iter().try_fold(first, |acc, &n| match (acc, n) {
        (Number::Int(a), Number::Int(b)) => int_op(a, b)
            .map(Number::Int)
            .ok_or_else(|| integer_overflow(operation)),
        (a, b) => Ok(Number::Float(float_op(a.as_f64(), b.as_f64()))),
    })
}

fn add(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    match args.first() {
        None => Ok(Value::Int(0)),
        Some(Value::Str(_)) => {
            let mut out = String::new();
            for arg in &args {
                out.push_str(arg.as_str().ok_or_else(|| type_mismatch("str", arg))?);
            }
            Ok(Value::string(out))
        }
        Some(Value::List(_)) => {
            let mut out = Vec::new();
            for arg in &args {
                out.extend_from_slice(arg.as_list().ok_or_else(|| type_mismatch("list", arg))?);
            }
            Ok(Value::list(out))
        }
        Some(_) => {
            let nums = numbers(&args)?;
            fold("+", nums[0], &nums[1..], i64::checked_add, |a, b| a + b).map(Value::from)
        }
    }
}

fn sub(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    expect_arity("-", &args, Arity::AtLeast(1))?;
    let nums = numbers(&args)?;
    if let [only] = nums.as_slice() {
        return match *only {
            Number::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("-")),
            Number::Float(n) => Ok(Value::Float(-n)),
        };
    }
    fold("-", nums[0], &nums[1..], i64::checked_sub, |a, b| a - b).map(Value::from)
}

fn mul(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let nums = numbers(&args)?;
    fold("*", Number::Int(1), &nums, i64::checked_mul, |a, b| a * b).map(Value::from)
}

/// Always a float; any zero divisor fails.
fn div(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    expect_arity("/", &args, Arity::AtLeast(2))?;
    let nums = numbers(&args)?;
    let mut quotient = nums[0].as_f64();
    for divisor in &nums[1..] {
        if divisor.is_zero() {
            return Err(division_by_zero());
        }
        quotient /= divisor.as_f64();
    }
    Ok(Value::Float(quotient))
}

fn abs(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [value] = expect_args("abs", args)?;
    match Number::of(&value) {
        Some(Number::Int(n)) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("abs")),
        Some(Number::Float(n)) => Ok(Value::Float(n.abs())),
        None => Err(type_mismatch("number", &value)),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
