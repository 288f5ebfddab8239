//! `little explain <code>`.

use std::process::ExitCode;

use little_diagnostic::ErrorCode;

pub fn explain_error(code: &str) -> ExitCode {
    let Ok(code) = code.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code}");
        eprintln!();
        eprintln!("Syntax errors are E1001-E1005, runtime errors E6001-E6014.");
        return ExitCode::FAILURE;
    };
    println!("{code}: {}", code.explanation());
    ExitCode::SUCCESS
}
