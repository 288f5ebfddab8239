//! The Little standard library.
//!
//! Every builtin is an ordinary [`BuiltinFn`] registered by name in the root
//! environment; the evaluator finds them through identifier lookup like any
//! other binding.
//!
//! | Table       | Names                                                |
//! |-------------|------------------------------------------------------|
//! | logic       | `and or all any not == != < > <= >= in`              |
//! | math        | `+ - * / abs`                                        |
//! | function    | `fn`                                                 |
//! | collections | `list map filter len get get-in`                     |
//! | console     | `print dbg`                                          |
//! | control     | `do id if eval def set!`                             |

mod args;
mod collections;
mod console;
mod control;
mod logic;
mod math;
mod number;

use little_eval::{fn_builtin, BuiltinFn, Environment, EvalError, Value};

/// A named group of builtins.
pub type BuiltinTable = &'static [(&'static str, BuiltinFn)];

const FUNCTION: BuiltinTable = &[("fn", fn_builtin)];

/// All tables, in load order.
pub const TABLES: &[BuiltinTable] = &[
    logic::BUILTINS,
    math::BUILTINS,
    FUNCTION,
    collections::BUILTINS,
    console::BUILTINS,
    control::BUILTINS,
];

/// Every builtin as a `(name, value)` pair, in load order.
pub fn prelude() -> Vec<(&'static str, Value)> {
    TABLES
        .iter()
        .flat_map(|table| table.iter())
        .map(|&(name, func)| (name, Value::builtin(name, func)))
        .collect()
}

/// A fresh root environment with the prelude loaded.
pub fn root_environment() -> Result<Environment, EvalError> {
    let env = Environment::new();
    env.load(prelude())?;
    tracing::debug!(builtins = env.local_names().len(), "root environment ready");
    Ok(env)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
