//! Tests for literal text and escape handling.

use messageformat::parser::{LiteralPart, Node, parse};
use messageformat::{Args, Formatter, params};

fn format(input: &str, args: &Args) -> String {
    let tree = parse(input).unwrap();
    Formatter::default().format_map(&tree, args).unwrap()
}

fn format_plain(input: &str) -> String {
    format(input, &Args::new())
}

// =============================================================================
// Plain text
// =============================================================================

#[test]
fn test_plain_text_is_unchanged() {
    for input in [
        "",
        "\n",
        " This is \n a string\"",
        "日本語",
        "Hello, 世界",
        "no braces, no escapes",
    ] {
        assert_eq!(format_plain(input), input);
    }
}

#[test]
fn test_backslash_before_ordinary_characters_is_kept() {
    for input in [r"\", r"\\", r"\\\", r"\q\", r"test\", r"\n"] {
        assert_eq!(format_plain(input), input);
    }
}

#[test]
fn test_empty_input_has_no_nodes() {
    assert!(parse("").unwrap().is_empty());
}

// =============================================================================
// Escapes
// =============================================================================

#[test]
fn test_escaped_structural_characters() {
    assert_eq!(format_plain(r"\#"), "#");
    assert_eq!(format_plain(r"\{"), "{");
    assert_eq!(format_plain(r"\}"), "}");
    assert_eq!(format_plain(r"日\{本\}語"), "日{本}語");
}

#[test]
fn test_backslash_runs_after_text() {
    assert_eq!(format_plain(r"he\\#ll\\\{o\\} \##!"), r"he\\#ll\\\{o\\} ##!");
}

#[test]
fn test_escaped_braces_around_expression() {
    assert_eq!(
        format(r"\{ {S, select, other{# is a \#}} \}", &params! { "S" => 5 }),
        "{ 5 is a # }"
    );
    assert_eq!(
        format(r"\{\{\{{test, plural, other{#}}\}\}\}", &params! { "test" => 4 }),
        "{{{4}}}"
    );
}

// =============================================================================
// Pound placeholders
// =============================================================================

#[test]
fn test_pound_outside_choice_is_literal() {
    assert_eq!(format_plain("# of items"), "# of items");
}

#[test]
fn test_pound_becomes_placeholder_part() {
    let tree = parse("a#b").unwrap();
    assert_eq!(
        tree.nodes,
        vec![Node::Literal(vec![
            LiteralPart::Text("a".into()),
            LiteralPart::Pound,
            LiteralPart::Text("b".into()),
        ])]
    );
}

#[test]
fn test_escaped_pound_is_text() {
    let tree = parse(r"a\#b").unwrap();
    assert_eq!(
        tree.nodes,
        vec![Node::Literal(vec![LiteralPart::Text("a#b".into())])]
    );
}

#[test]
fn test_non_ascii_around_variable() {
    assert_eq!(
        format("猫 {N}。。。", &params! { "N" => "キティ" }),
        "猫 キティ。。。"
    );
}
