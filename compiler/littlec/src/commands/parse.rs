//! `little parse <file>`: print each top-level form with its location.

use std::fmt::Write;
use std::process::ExitCode;

use little_ir::Node;
use little_parse::parse;

use super::{read_file, report, Options};
use crate::LittleError;

pub fn parse_file(path: &str, options: Options) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(err) => {
            report(&err, options, "");
            return ExitCode::FAILURE;
        }
    };
    match parse(&source) {
        Ok(block) => {
            print!("{}", render_forms(&block));
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&LittleError::from(err), options, &source);
            ExitCode::FAILURE
        }
    }
}

/// One line per top-level form: `line:col  kind  form`, then a count.
pub(crate) fn render_forms(block: &Node) -> String {
    let forms = block.children();
    let mut out = String::new();
    for form in forms {
        let _ = writeln!(out, "{}\t{}\t{form}", form.span, form.describe());
    }
    let plural = if forms.len() == 1 { "" } else { "s" };
    let _ = writeln!(out, "{} form{plural}", forms.len());
    out
}
