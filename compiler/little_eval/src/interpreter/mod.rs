//! The evaluator.
//!
//! [`Interpreter::eval`] is total over [`NodeKind`]: one arm per node shape,
//! children evaluated strictly left to right. The interpreter itself holds
//! no bindings; all state a program can observe lives in the
//! [`Environment`] chain.

mod builder;

use std::rc::Rc;

use little_ir::{Node, NodeKind, Span};
use little_stack::ensure_sufficient_stack;

use crate::errors::{empty_block, empty_expression, malformed_map, not_callable};
use crate::{
    CallFrame, CallStack, Environment, EvalResult, FunctionValue, MapValue, QuotedValue,
    SharedPrintHandler, Value,
};

pub use builder::InterpreterBuilder;

pub struct Interpreter {
    print_handler: SharedPrintHandler,
    call_stack: CallStack,
}

impl Interpreter {
    /// An interpreter writing to stdout with the default call-depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    /// Write one line of program output.
    pub fn println(&self, msg: &str) {
        self.print_handler.println(msg);
    }

    /// Evaluate `node` in `env`.
    pub fn eval(&mut self, env: &Environment, node: &Node) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_node(env, node))
    }

    /// Run a deferred form in the environment it was quoted in.
    pub fn exec_quoted(&mut self, quoted: &QuotedValue) -> EvalResult {
        self.eval(&quoted.env, &quoted.node)
    }

    /// Apply `callee` to already-evaluated arguments.
    ///
    /// `span` is the call site, used for errors and the backtrace.
    pub fn call(&mut self, callee: &Value, args: Vec<Value>, span: Option<Span>) -> EvalResult {
        let Value::Function(func) = callee else {
            let err = not_callable(callee);
            return Err(match span {
                Some(span) => err.with_span(span),
                None => err,
            });
        };
        self.call_function(func, func.name().to_string(), args, span)
    }

    fn eval_node(&mut self, env: &Environment, node: &Node) -> EvalResult {
        match &node.kind {
            NodeKind::Literal(lit) => Ok(Value::from_literal(lit)),
            NodeKind::Identifier(name) => env.get(name).map_err(|e| e.or_span(node.span)),
            NodeKind::Expression(children) => {
                let Some(head) = children.first() else {
                    return Err(empty_expression().with_span(node.span));
                };
                let mut values = self.eval_all(env, children)?.into_iter();
                let callee = values.next().unwrap_or_default();
                let Value::Function(func) = callee else {
                    return Err(not_callable(&callee).with_span(head.span));
                };
                let name = head
                    .as_identifier()
                    .map_or_else(|| func.name().to_string(), str::to_string);
                self.call_function(&func, name, values.collect(), Some(node.span))
            }
            NodeKind::Vector(children) => Ok(Value::list(self.eval_all(env, children)?)),
            NodeKind::Map(children) => {
                if children.len() % 2 != 0 {
                    return Err(malformed_map(children.len()).with_span(node.span));
                }
                let mut values = self.eval_all(env, children)?.into_iter();
                let mut map = MapValue::new();
                while let (Some(key), Some(value)) = (values.next(), values.next()) {
                    map.insert(key, value);
                }
                Ok(Value::map(map))
            }
            NodeKind::Block(children) => {
                if children.is_empty() {
                    return Err(empty_block().with_span(node.span));
                }
                tracing::debug!(forms = children.len(), "evaluating block");
                let mut last = Value::Nil;
                for child in children {
                    last = self.eval(env, child)?;
                }
                Ok(last)
            }
            NodeKind::Quoted(inner) => Ok(Value::quoted(Rc::clone(inner), env.clone())),
        }
    }

    fn eval_all(&mut self, env: &Environment, nodes: &[Node]) -> Result<Vec<Value>, crate::EvalError> {
        nodes.iter().map(|n| self.eval(env, n)).collect()
    }

    fn call_function(
        &mut self,
        func: &FunctionValue,
        name: String,
        args: Vec<Value>,
        span: Option<Span>,
    ) -> EvalResult {
        tracing::trace!(
            function = %name,
            args = args.len(),
            depth = self.call_stack.depth(),
            "call"
        );
        let frame = CallFrame {
            name,
            call_span: span,
        };
        if let Err(err) = self.call_stack.push(frame) {
            return Err(self.call_stack.attach_backtrace(with_call_span(err, span)));
        }
        let result = match func {
            FunctionValue::Builtin(builtin) => (builtin.func)(self, args),
            FunctionValue::Closure(closure) => closure.invoke(self, args),
        };
        let result =
            result.map_err(|err| self.call_stack.attach_backtrace(with_call_span(err, span)));
        self.call_stack.pop();
        result
    }
}

fn with_call_span(err: crate::EvalError, span: Option<Span>) -> crate::EvalError {
    match span {
        Some(span) => err.or_span(span),
        None => err,
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

/// Evaluate `node` in `env` with a default interpreter.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(env: &Environment, node: &Node) -> EvalResult {
    Interpreter::new().eval(env, node)
}
