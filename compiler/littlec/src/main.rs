//! The `little` command-line interface.

use std::process::ExitCode;

use littlec::commands::{explain_error, parse_file, parse_options, run_file, run_repl};

fn main() -> ExitCode {
    littlec::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = args[1].as_str();
    let (options, positional) = match parse_options(&args[2..]) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    match command {
        "run" => {
            let Some(path) = positional.first() else {
                eprintln!("Usage: little run <file> [--max-depth=<n>] [--color=<mode>]");
                return ExitCode::FAILURE;
            };
            run_file(path, options)
        }
        "parse" => {
            let Some(path) = positional.first() else {
                eprintln!("Usage: little parse <file>");
                return ExitCode::FAILURE;
            };
            parse_file(path, options)
        }
        "repl" => run_repl(options),
        "explain" | "--explain" => {
            let Some(code) = positional.first() else {
                eprintln!("Usage: little explain <ERROR_CODE>");
                eprintln!("Example: little explain E6001");
                return ExitCode::FAILURE;
            };
            explain_error(code)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("little {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("lil"))
            {
                run_file(command, options)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

fn print_usage() {
    println!("Little, a small Lisp");
    println!();
    println!("Usage: little <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Evaluate a Little program");
    println!("  parse <file>         Print the top-level forms of a program");
    println!("  repl                 Start an interactive session");
    println!("  explain <code>       Explain an error code (e.g., E6001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>      Maximum call depth (default: 10000)");
    println!("  --color=<mode>       Diagnostics color: auto, always, never");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=little_eval=trace little run main.lil");
}
