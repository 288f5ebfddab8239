//! Tree-walking evaluator for Little.
//!
//! Evaluation maps `(environment, node)` to a [`Value`]. The node set is
//! closed, so [`Interpreter::eval`] is a single exhaustive match. Everything
//! else the language can do (arithmetic, control flow, definitions) is a host
//! function found through environment lookup; see the `little_std` crate.
//!
//! # Deferred evaluation
//!
//! A quoted form `'x` evaluates to a [`QuotedValue`]: the unevaluated node
//! plus the environment it was quoted in. Host functions such as `fn`, `if`
//! and `def` execute it later with [`Interpreter::exec_quoted`].

mod closure;
mod diagnostics;
mod environment;
mod errors;
mod function;
mod interpreter;
mod print_handler;
mod value;

pub use closure::{fn_builtin, Closure};
pub use diagnostics::{CallFrame, CallStack, DEFAULT_MAX_DEPTH};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{
    already_defined, arity_mismatch, division_by_zero, empty_block, empty_expression,
    index_out_of_bounds, integer_overflow, invalid_parameter, key_not_found, malformed_map,
    not_callable, not_defined, recursion_limit, type_mismatch, Arity, BacktraceFrame,
    EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
};
pub use function::{BuiltinFn, BuiltinFunction, FunctionValue, QuotedValue};
pub use interpreter::{evaluate, Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{Heap, MapValue, Value};
