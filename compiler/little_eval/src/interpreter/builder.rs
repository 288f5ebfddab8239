//! Builder for [`Interpreter`].

use super::Interpreter;
use crate::{stdout_handler, CallStack, SharedPrintHandler, DEFAULT_MAX_DEPTH};

/// Configures an [`Interpreter`].
///
/// ```text
/// let interp = Interpreter::builder()
///     .print_handler(buffer_handler())
///     .max_depth(500)
///     .build();
/// ```
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            print_handler: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Where `print` and `dbg` write. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Maximum number of nested calls before `RecursionLimit`.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_stack: CallStack::new(self.max_depth),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        InterpreterBuilder::new()
    }
}
