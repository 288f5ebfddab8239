//! Argument checking shared by the builtin tables.

use little_eval::{arity_mismatch, type_mismatch, Arity, EvalError, QuotedValue, Value};

/// Exactly `N` arguments, destructured.
pub(crate) fn expect_args<const N: usize>(
    name: &str,
    args: Vec<Value>,
) -> Result<[Value; N], EvalError> {
    let got = args.len();
    <[Value; N]>::try_from(args).map_err(|_| arity_mismatch(name, Arity::Exactly(N), got))
}

pub(crate) fn expect_arity(name: &str, args: &[Value], arity: Arity) -> Result<(), EvalError> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(arity_mismatch(name, arity, args.len()))
    }
}

pub(crate) fn expect_str<'a>(value: &'a Value, what: &str) -> Result<&'a str, EvalError> {
    value.as_str().ok_or_else(|| type_mismatch(what, value))
}

pub(crate) fn expect_quoted<'a>(value: &'a Value, what: &str) -> Result<&'a QuotedValue, EvalError> {
    value.as_quoted().ok_or_else(|| type_mismatch(what, value))
}

/// Elements of a collection as a sequence: list items, map keys, or the
/// characters of a string.
pub(crate) fn elements(value: &Value) -> Result<Vec<Value>, EvalError> {
    match value {
        Value::List(items) => Ok(items.to_vec()),
        Value::Map(map) => Ok(map.keys().cloned().collect()),
        Value::Str(s) => Ok(s.chars().map(|c| Value::string(c.to_string())).collect()),
        other => Err(type_mismatch("list, map or str", other)),
    }
}
