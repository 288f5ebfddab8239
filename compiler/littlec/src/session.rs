//! Embedding API: a root environment plus an interpreter that persist
//! across calls.

use little_diagnostic::Diagnostic;
use little_eval::{
    stdout_handler, Environment, EvalError, EvalResult, Interpreter, SharedPrintHandler, Value,
    DEFAULT_MAX_DEPTH,
};
use little_parse::{parse, SyntaxError};

/// Anything that can go wrong running Little source.
#[derive(Debug, thiserror::Error)]
pub enum LittleError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("cannot read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LittleError {
    /// Renderable form; I/O failures have no source location to show.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            LittleError::Syntax(err) => Some(err.to_diagnostic()),
            LittleError::Eval(err) => Some(err.to_diagnostic()),
            LittleError::Io { .. } => None,
        }
    }
}

/// A standard-library root environment and the interpreter that runs
/// against it. Definitions made by one `exec` are visible to the next.
pub struct Session {
    env: Environment,
    interp: Interpreter,
}

impl Session {
    /// A session printing to stdout with the default call-depth limit.
    pub fn new() -> Result<Self, LittleError> {
        SessionBuilder::new().build()
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }

    /// Parse and evaluate `source` as one block.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn exec(&mut self, source: &str) -> Result<Value, LittleError> {
        let node = parse(source)?;
        Ok(self.interp.eval(&self.env, &node)?)
    }

    /// Parse `source`, then evaluate each top-level form on its own.
    ///
    /// A runtime error in one form does not stop the following ones. A
    /// syntax error anywhere means nothing is evaluated.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn exec_each(&mut self, source: &str) -> Result<Vec<EvalResult>, LittleError> {
        let block = parse(source)?;
        Ok(block
            .children()
            .iter()
            .map(|form| self.interp.eval(&self.env, form))
            .collect())
    }
}

/// Configures a [`Session`].
pub struct SessionBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_depth: usize,
}

impl SessionBuilder {
    pub fn new() -> Self {
        SessionBuilder {
            print_handler: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn build(self) -> Result<Session, LittleError> {
        let interp = Interpreter::builder()
            .print_handler(self.print_handler.unwrap_or_else(stdout_handler))
            .max_depth(self.max_depth)
            .build();
        Ok(Session {
            env: little_std::root_environment()?,
            interp,
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        SessionBuilder::new()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
