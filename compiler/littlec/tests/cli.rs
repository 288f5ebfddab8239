//! End-to-end tests of the `little` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn little(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_little"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|err| panic!("failed to spawn little: {err}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn run_prints_program_output() {
    let path = fixture("fact.lil");
    let output = little(&["run", path.to_str().unwrap_or_default()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "fact 10 = 3628800\n[1, 2, 6]\n");
}

#[test]
fn file_argument_runs_directly() {
    let path = fixture("fact.lil");
    let output = little(&[path.to_str().unwrap_or_default()]);
    assert!(output.status.success());
}

#[test]
fn runtime_error_renders_snippet() {
    let path = fixture("undefined.lil");
    let output = little(&["run", path.to_str().unwrap_or_default(), "--color=never"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.starts_with("error[E6001]: `y` is not defined\n"), "{err}");
    assert!(err.contains("2 | (print (+ x y))"), "{err}");
}

#[test]
fn syntax_error_exits_with_failure() {
    let path = fixture("odd_map.lil");
    let output = little(&["run", path.to_str().unwrap_or_default(), "--color=never"]);
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("error[E1005]"));
}

#[test]
fn max_depth_option() {
    let path = fixture("fact.lil");
    let output = little(&[
        "run",
        path.to_str().unwrap_or_default(),
        "--max-depth=5",
        "--color=never",
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("E6012"));
}

#[test]
fn parse_lists_forms() {
    let path = fixture("odd_map.lil");
    let output = little(&["parse", path.to_str().unwrap_or_default(), "--color=never"]);
    assert!(!output.status.success());

    let path = fixture("undefined.lil");
    let output = little(&["parse", path.to_str().unwrap_or_default()]);
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("2 forms\n"));
}

#[test]
fn explain_known_and_unknown_codes() {
    let output = little(&["explain", "E6001"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("E6001: "));

    let output = little(&["explain", "E9999"]);
    assert!(!output.status.success());
}

#[test]
fn missing_file_reports_io_error() {
    let output = little(&["run", "/no/such/file.lil"]);
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("error: cannot read"));
}

#[test]
fn unknown_command_fails() {
    let output = little(&["frobnicate"]);
    assert!(!output.status.success());
}
