//! `print` and `dbg`.

use little_eval::{BuiltinFn, EvalResult, Interpreter, Value};

use crate::args::expect_args;

pub(crate) const BUILTINS: &[(&str, BuiltinFn)] = &[("print", print), ("dbg", dbg)];

/// Arguments in display form, space separated, on one line.
fn print(interp: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let line = args
        .iter()
        .map(Value::display_value)
        .collect::<Vec<_>>()
        .join(" ");
    interp.println(&line);
    Ok(Value::Nil)
}

/// Prints the literal form and passes the value through.
fn dbg(interp: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [value] = expect_args("dbg", args)?;
    interp.println(&value.to_string());
    Ok(value)
}
