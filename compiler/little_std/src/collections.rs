//! `list map filter len get get-in`.

use little_eval::{
    index_out_of_bounds, key_not_found, type_mismatch, BuiltinFn, EvalError, EvalResult,
    Interpreter, Value,
};

use crate::args::{elements, expect_args};

pub(crate) const BUILTINS: &[(&str, BuiltinFn)] = &[
    ("list", list),
    ("map", map),
    ("filter", filter),
    ("len", len),
    ("get", get),
    ("get-in", get_in),
];

fn list(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    Ok(Value::list(args))
}

/// `(map coll f)`: `f` applied to each element, in order.
fn map(interp: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [coll, func] = expect_args("map", args)?;
    let mut out = Vec::new();
    for item in elements(&coll)? {
        out.push(interp.call(&func, vec![item], None)?);
    }
    Ok(Value::list(out))
}

/// `(filter coll pred)`: elements for which `pred` is truthy.
fn filter(interp: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [coll, pred] = expect_args("filter", args)?;
    let mut out = Vec::new();
    for item in elements(&coll)? {
        if interp.call(&pred, vec![item.clone()], None)?.is_truthy() {
            out.push(item);
        }
    }
    Ok(Value::list(out))
}

#[allow(
    clippy::cast_possible_wrap,
    reason = "collection lengths are far below i64::MAX"
)]
fn len(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [coll] = expect_args("len", args)?;
    let n = match &coll {
        Value::List(items) => items.len(),
        Value::Map(map) => map.len(),
        Value::Str(s) => s.chars().count(),
        other => return Err(type_mismatch("list, map or str", other)),
    };
    Ok(Value::Int(n as i64))
}

/// Resolve a possibly negative index against `len`.
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "bounds are checked before converting back"
)]
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let resolved = if index < 0 { index + len as i64 } else { index };
    (0..len as i64).contains(&resolved).then_some(resolved as usize)
}

/// Lookup that reports a missing key or index as `None`.
fn lookup(coll: &Value, key: &Value) -> Result<Option<Value>, EvalError> {
    match coll {
        Value::Map(map) => Ok(map.get(key).cloned()),
        Value::List(items) => {
            let index = key.as_int().ok_or_else(|| type_mismatch("int index", key))?;
            Ok(resolve_index(index, items.len()).map(|i| items[i].clone()))
        }
        Value::Str(s) => {
            let index = key.as_int().ok_or_else(|| type_mismatch("int index", key))?;
            let chars: Vec<char> = s.chars().collect();
            Ok(resolve_index(index, chars.len()).map(|i| Value::string(chars[i].to_string())))
        }
        other => Err(type_mismatch("list, map or str", other)),
    }
}

/// `(get coll key)`. Negative indices count from the end.
fn get(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [coll, key] = expect_args("get", args)?;
    if let Some(value) = lookup(&coll, &key)? {
        return Ok(value);
    }
    match (&coll, key.as_int()) {
        (Value::List(items), Some(index)) => Err(index_out_of_bounds(index, items.len())),
        (Value::Str(s), Some(index)) => Err(index_out_of_bounds(index, s.chars().count())),
        _ => Err(key_not_found(&key)),
    }
}

/// `(get-in coll [k1 k2 ...])`: nested lookup, `nil` at the first miss.
fn get_in(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [coll, keys] = expect_args("get-in", args)?;
    let keys = keys.as_list().ok_or_else(|| type_mismatch("list of keys", &keys))?;
    let mut current = coll;
    for key in keys {
        match lookup(&current, key)? {
            Some(next) => current = next,
            None => return Ok(Value::Nil),
        }
    }
    Ok(current)
}
