//! Sequencing, branching and definitions.
//!
//! These take quoted forms where evaluation has to be deferred: `if` runs
//! only the chosen branch, `def` runs its value in the quoted form's own
//! environment and binds the result there.

use little_eval::{arity_mismatch, Arity, BuiltinFn, EvalResult, Interpreter, Value};

use crate::args::{expect_args, expect_quoted, expect_str};

pub(crate) const BUILTINS: &[(&str, BuiltinFn)] = &[
    ("do", do_),
    ("id", id),
    ("if", if_),
    ("eval", eval),
    ("def", def),
    ("set!", set),
];

fn do_(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    Ok(args.into_iter().last().unwrap_or_default())
}

fn id(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [value] = expect_args("id", args)?;
    Ok(value)
}

/// Run a branch: quoted branches are executed, anything else is already a
/// value.
fn run_branch(interp: &mut Interpreter, branch: &Value) -> EvalResult {
    match branch {
        Value::Quoted(q) => interp.exec_quoted(q),
        other => Ok(other.clone()),
    }
}

/// `(if cond then)` or `(if cond then else)`; `nil` when the condition is
/// false and there is no else branch.
fn if_(interp: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let got = args.len();
    let mut args = args.into_iter();
    let (Some(cond), Some(then), otherwise, None) =
        (args.next(), args.next(), args.next(), args.next())
    else {
        return Err(arity_mismatch("if", Arity::Range(2, 3), got));
    };
    if cond.is_truthy() {
        run_branch(interp, &then)
    } else {
        otherwise.map_or(Ok(Value::Nil), |branch| run_branch(interp, &branch))
    }
}

/// `(eval 'form)`; non-quoted values are returned unchanged.
fn eval(interp: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [value] = expect_args("eval", args)?;
    run_branch(interp, &value)
}

/// `(def :name 'value)`.
fn def(interp: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [name, value] = expect_args("def", args)?;
    let name = expect_str(&name, "name")?;
    let quoted = expect_quoted(&value, "quoted value")?;
    let result = interp.exec_quoted(quoted)?;
    quoted.env.define(name, result)
}

/// `(set! :name 'value)`: rebind the nearest existing binding.
fn set(interp: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let [name, value] = expect_args("set!", args)?;
    let name = expect_str(&name, "name")?;
    let quoted = expect_quoted(&value, "quoted value")?;
    let result = interp.exec_quoted(quoted)?;
    quoted.env.set(name, result)
}
