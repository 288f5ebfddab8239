//! User-defined functions.

use std::rc::Rc;

use little_ir::{Node, NodeKind};
use rustc_hash::FxHashSet;

use crate::errors::{already_defined, arity_mismatch, invalid_parameter, type_mismatch};
use crate::{Arity, EvalResult, Environment, Interpreter, Value};

/// A function built by `fn`: parameter names, a body, and the environment
/// the body was quoted in.
pub struct Closure {
    params: Vec<String>,
    body: Rc<Node>,
    env: Environment,
}

impl Closure {
    pub fn new(params: Vec<String>, body: Rc<Node>, env: Environment) -> Self {
        Closure { params, body, env }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    /// The defining environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Bind the arguments in a fresh child of the defining environment and
    /// evaluate the body there.
    pub(crate) fn invoke(&self, interp: &mut Interpreter, args: Vec<Value>) -> EvalResult {
        if args.len() != self.params.len() {
            let name = interp
                .call_stack()
                .current_frame()
                .map_or("fn", |f| f.name.as_str());
            return Err(arity_mismatch(
                name,
                Arity::Exactly(self.params.len()),
                args.len(),
            ));
        }
        let scope = self.env.new_scope();
        for (param, arg) in self.params.iter().zip(args) {
            scope.define(param.as_str(), arg)?;
        }
        interp.eval(&scope, &self.body)
    }
}

/// `(fn params body)`.
///
/// `params` is `'(a b)`, `'[a b]` or `[:a :b]`; `body` must be quoted, and
/// its environment becomes the closure's. Parameters are checked here, not
/// at the first call.
pub fn fn_builtin(_interp: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let got = args.len();
    let Ok([params, body]) = <[Value; 2]>::try_from(args) else {
        return Err(arity_mismatch("fn", Arity::Exactly(2), got));
    };
    let Value::Quoted(body) = body else {
        return Err(type_mismatch("quoted body", &body));
    };
    let params = parameter_names(&params)?;
    Ok(Value::closure(Closure::new(params, body.node, body.env)))
}

fn parameter_names(params: &Value) -> Result<Vec<String>, crate::EvalError> {
    let names: Vec<String> = match params {
        Value::Quoted(q) => match &q.node.kind {
            NodeKind::Expression(children) | NodeKind::Vector(children) => children
                .iter()
                .map(|child| {
                    child
                        .as_identifier()
                        .map(str::to_string)
                        .ok_or_else(|| invalid_parameter(child))
                })
                .collect::<Result<_, _>>()?,
            _ => return Err(invalid_parameter(&q.node)),
        },
        Value::List(items) => items
            .iter()
            .map(|item| match item.as_str() {
                Some(name) if !name.is_empty() => Ok(name.to_string()),
                _ => Err(invalid_parameter(item)),
            })
            .collect::<Result<_, _>>()?,
        other => return Err(type_mismatch("parameter list", other)),
    };

    let mut seen = FxHashSet::default();
    for name in &names {
        if !seen.insert(name.as_str()) {
            return Err(already_defined(name));
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests;
