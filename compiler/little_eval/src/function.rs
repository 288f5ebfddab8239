//! Callable and deferred values.

use std::fmt;
use std::rc::Rc;

use little_ir::Node;

use crate::{Closure, EvalResult, Environment, Interpreter, Value};

/// Signature of host functions.
///
/// Arguments arrive already evaluated, left to right. A builtin that needs
/// to evaluate code (e.g. `if`) receives it as a [`QuotedValue`] and runs it
/// through the interpreter.
pub type BuiltinFn = fn(&mut Interpreter, Vec<Value>) -> EvalResult;

#[derive(Clone, Copy)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// Anything an expression head can evaluate to and be called.
#[derive(Clone)]
pub enum FunctionValue {
    Builtin(BuiltinFunction),
    Closure(Rc<Closure>),
}

impl FunctionValue {
    /// Name used in call frames and error messages.
    pub fn name(&self) -> &str {
        match self {
            FunctionValue::Builtin(b) => b.name,
            FunctionValue::Closure(_) => "fn",
        }
    }

    /// Identity comparison. Builtins are identified by name.
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        match (self, other) {
            (FunctionValue::Builtin(a), FunctionValue::Builtin(b)) => a.name == b.name,
            (FunctionValue::Closure(a), FunctionValue::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionValue::Builtin(b) => write!(f, "<builtin {}>", b.name),
            FunctionValue::Closure(c) => write!(f, "<fn ({})>", c.params().join(" ")),
        }
    }
}

/// A form whose evaluation was deferred, bundled with the environment that
/// was live when it was quoted.
#[derive(Clone)]
pub struct QuotedValue {
    pub node: Rc<Node>,
    pub env: Environment,
}
