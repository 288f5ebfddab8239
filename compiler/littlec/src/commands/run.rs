//! `little run <file>`.

use std::process::ExitCode;

use super::{read_file, report, Options};
use crate::Session;

/// Evaluate a source file with the standard library loaded.
pub fn run_file(path: &str, options: Options) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(err) => {
            report(&err, options, "");
            return ExitCode::FAILURE;
        }
    };
    let result = Session::builder()
        .max_depth(options.max_depth)
        .build()
        .and_then(|mut session| session.exec(&source));
    match result {
        Ok(value) => {
            tracing::debug!(result = %value, "program finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err, options, &source);
            ExitCode::FAILURE
        }
    }
}
