use little_parse::parse;
use pretty_assertions::assert_eq;

use super::parse::render_forms;
use super::*;

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

#[test]
fn options_default() {
    let (options, positional) = parse_options(&strings(&["main.lil"])).unwrap();
    assert_eq!(options, Options::default());
    assert_eq!(positional, strings(&["main.lil"]));
}

#[test]
fn options_parsed_anywhere() {
    let (options, positional) =
        parse_options(&strings(&["--max-depth=64", "main.lil", "--color=never"])).unwrap();
    assert_eq!(options.max_depth, 64);
    assert_eq!(options.color, ColorMode::Never);
    assert_eq!(positional, strings(&["main.lil"]));
}

#[test]
fn options_rejected() {
    assert!(parse_options(&strings(&["--max-depth=lots"])).is_err());
    assert!(parse_options(&strings(&["--color=blue"])).is_err());
    assert!(parse_options(&strings(&["--frobnicate"])).is_err());
}

#[test]
fn completeness() {
    assert!(is_complete("(+ 1 2)"));
    assert!(is_complete("1 2"));
    assert!(!is_complete("(def :f '(fn '(a)"));
    assert!(!is_complete(r#"(print "unterminated"#));
    assert!(is_complete(r#"(print "(")"#));
    assert!(is_complete(r#"(print "\"(")"#));
    assert!(!is_complete("'"));
    assert!(is_complete(")"));
}

#[test]
fn render_forms_lists_each_form() {
    let block = parse("(+ 1 2)\n:sym").unwrap();
    assert_eq!(
        render_forms(&block),
        "1:1\texpression\t(+ 1 2)\n2:1\tsymbol\t:sym\n2 forms\n"
    );
}

#[test]
fn read_missing_file_is_io_error() {
    let err = read_file("/definitely/not/here.lil").unwrap_err();
    assert!(matches!(err, LittleError::Io { .. }));
}
