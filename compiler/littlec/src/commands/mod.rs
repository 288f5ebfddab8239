//! CLI commands.
//!
//! Each command reports its own diagnostics on stderr and returns the
//! process exit code.

mod explain;
mod parse;
mod repl;
mod run;

use std::io::IsTerminal;

use little_diagnostic::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use little_eval::DEFAULT_MAX_DEPTH;

use crate::LittleError;

pub use explain::explain_error;
pub use parse::parse_file;
pub use repl::{is_complete, run_repl};
pub use run::run_file;

/// Options shared by the commands that evaluate code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub max_depth: usize,
    pub color: ColorMode,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_depth: DEFAULT_MAX_DEPTH,
            color: ColorMode::Auto,
        }
    }
}

/// Split `args` into options and positional arguments.
///
/// Recognizes `--max-depth=<n>` and `--color=auto|always|never`.
pub fn parse_options(args: &[String]) -> Result<(Options, Vec<String>), String> {
    let mut options = Options::default();
    let mut positional = Vec::new();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_depth = value
                .parse()
                .map_err(|_| format!("invalid --max-depth value `{value}`"))?;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = match value {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => return Err(format!("invalid --color value `{value}`")),
            };
        } else if arg.starts_with("--") {
            return Err(format!("unknown option `{arg}`"));
        } else {
            positional.push(arg.clone());
        }
    }
    Ok((options, positional))
}

fn read_file(path: &str) -> Result<String, LittleError> {
    std::fs::read_to_string(path).map_err(|source| LittleError::Io {
        path: path.to_string(),
        source,
    })
}

fn stderr_emitter(options: Options, source: &str) -> TerminalEmitter<std::io::Stderr> {
    let is_tty = std::io::stderr().is_terminal();
    TerminalEmitter::stderr(options.color, is_tty).with_source(source)
}

/// Print `err` on stderr, with a source snippet when it has a location.
fn report(err: &LittleError, options: Options, source: &str) {
    match err.to_diagnostic() {
        Some(diag) => {
            let mut emitter = stderr_emitter(options, source);
            emitter.emit(&diag);
            emitter.flush();
        }
        None => eprintln!("error: {err}"),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
