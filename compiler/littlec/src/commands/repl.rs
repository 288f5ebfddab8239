//! `little repl`.
//!
//! Lines are buffered until every bracket opened in them is closed, then the
//! buffered forms are evaluated one by one in a persistent session.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use super::{report, Options};
use crate::{LittleError, Session};

pub fn run_repl(options: Options) -> ExitCode {
    let mut session = match Session::builder().max_depth(options.max_depth).build() {
        Ok(session) => session,
        Err(err) => {
            report(&err, options, "");
            return ExitCode::FAILURE;
        }
    };

    println!("Little {} (:quit to exit)", env!("CARGO_PKG_VERSION"));
    let stdin = io::stdin();
    let mut buffer = String::new();
    loop {
        print!("{}", if buffer.is_empty() { "> " } else { ". " });
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: cannot read input: {err}");
                return ExitCode::FAILURE;
            }
        }
        if buffer.is_empty() && matches!(line.trim(), ":q" | ":quit") {
            break;
        }
        buffer.push_str(&line);
        if !is_complete(&buffer) {
            continue;
        }

        let source = std::mem::take(&mut buffer);
        if source.trim().is_empty() {
            continue;
        }
        match session.exec_each(&source) {
            Ok(results) => {
                for result in results {
                    match result {
                        Ok(value) => println!("{value}"),
                        Err(err) => report(&LittleError::Eval(err), options, &source),
                    }
                }
            }
            Err(err) => report(&err, options, &source),
        }
    }
    ExitCode::SUCCESS
}

/// Whether `source` can be handed to the reader: no open brackets, no
/// unterminated string, and no dangling `'`.
///
/// Surplus closers count as complete so the reader reports them.
pub fn is_complete(source: &str) -> bool {
    let mut depth: i64 = 0;
    let mut in_string = false;
    let mut escaped = false;
    for c in source.chars() {
        if in_string {
            match (escaped, c) {
                (true, _) => escaped = false,
                (false, '\\') => escaped = true,
                (false, '"') => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            _ => {}
        }
    }
    !in_string && depth <= 0 && !source.trim_end().ends_with('\'')
}
