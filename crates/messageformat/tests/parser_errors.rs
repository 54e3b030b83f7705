//! Tests for parse error kinds and positions.

use messageformat::parser::{ParseError, ParseErrorKind, Parser, parse};

fn parse_err(input: &str) -> ParseError {
    match parse(input) {
        Ok(tree) => panic!("expected `{input}` to fail, got {tree:?}"),
        Err(e) => e,
    }
}

fn assert_error(input: &str, kind: ParseErrorKind, position: usize) {
    let err = parse_err(input);
    assert_eq!(err, ParseError::new(kind, position), "input: {input}");
}

// =============================================================================
// Braces
// =============================================================================

#[test]
fn test_unbalanced_braces() {
    let cases = [
        ("{", 1),
        ("{N}}", 3),
        ("{N", 2),
        ("{ N , select", 12),
        ("{N, select, other", 17),
        ("{N, plural, other{#}", 20),
        ("{N, plural, other{#{", 20),
        ("{N, plural, other", 17),
        ("{N, plural, offset:", 19),
    ];
    for (input, position) in cases {
        assert_error(input, ParseErrorKind::UnbalancedBraces, position);
    }
}

#[test]
fn test_invalid_expr() {
    assert_error("{{}", ParseErrorKind::InvalidExpr, 1);
    assert_error("{N,{}", ParseErrorKind::InvalidExpr, 3);
}

// =============================================================================
// Variable names
// =============================================================================

#[test]
fn test_missing_var_name() {
    assert_error("{}", ParseErrorKind::MissingVarName, 1);
    assert_error("{       }", ParseErrorKind::MissingVarName, 8);
    assert_error("{    ,   }", ParseErrorKind::MissingVarName, 5);
    assert_error("{ , , }", ParseErrorKind::MissingVarName, 2);
}

#[test]
fn test_invalid_format() {
    let cases = [
        (r"{\}", 1),
        (r"{\}NAME", 1),
        ("{NA-ME}", 3),
        ("{N A M E}", 3),
        ("{NAMé}", 4),
        ("{NAMÉ}", 4),
        ("{なまえ}", 1),
        ("{ N, sel ect, other {#} }", 9),
    ];
    for (input, position) in cases {
        assert_error(input, ParseErrorKind::InvalidFormat, position);
    }
}

// =============================================================================
// Expression kinds
// =============================================================================

#[test]
fn test_unknown_type() {
    assert_error(
        "{ N, SELECT, other {#} }",
        ParseErrorKind::UnknownType {
            name: "SELECT".into(),
        },
        11,
    );
}

#[test]
fn test_unknown_type_suggests_known_kinds() {
    let parser = Parser::new();
    let err = parser.parse("{N, plurl, other{#}}").unwrap_err();
    assert_eq!(
        err.help(&parser.known_kinds()).as_deref(),
        Some("did you mean: plural?")
    );
}

#[test]
fn test_malformed_option() {
    assert_error("{N, select}", ParseErrorKind::MalformedOption, 10);
    assert_error("{N, selectordinal}", ParseErrorKind::MalformedOption, 17);
    assert_error("{N, plural}", ParseErrorKind::MalformedOption, 10);
}

// =============================================================================
// Choices
// =============================================================================

#[test]
fn test_missing_choice_name() {
    let cases = [
        ("{N, select, {#} other {#}}", 12),
        ("{N, select, other {#} {#}}", 22),
        ("{N, selectordinal, {#} other {#}}", 19),
        ("{N, selectordinal, other {#} {#}}", 29),
        ("{N, plural, {#} other {#}}", 12),
        ("{N, plural, other {#} {#}}", 22),
        ("{N, plural, offset:1{#} other {#}}", 20),
        ("{N, plural, offset:1 {#} other {#}}", 21),
        ("{N, plural, offset:1 other {#} {#}}", 31),
    ];
    for (input, position) in cases {
        assert_error(input, ParseErrorKind::MissingChoiceName, position);
    }
}

#[test]
fn test_missing_choice_content() {
    assert_error(
        "{N, select, one two{She} other{Other}}",
        ParseErrorKind::MissingChoiceContent,
        16,
    );
    assert_error(
        "{N, selectordinal, one two{She} other{Other}}",
        ParseErrorKind::MissingChoiceContent,
        23,
    );
    assert_error(
        "{N, plural, one two{She} other{Other}}",
        ParseErrorKind::MissingChoiceContent,
        16,
    );
}

#[test]
fn test_missing_mandatory_choice() {
    assert_error(
        "{N, select, one{He} two{She}}",
        ParseErrorKind::MissingMandatoryChoice,
        28,
    );
    assert_error(
        "{N, selectordinal, one{He} two{She}}",
        ParseErrorKind::MissingMandatoryChoice,
        35,
    );
    assert_error(
        "{N, plural, one{He} two{She}}",
        ParseErrorKind::MissingMandatoryChoice,
        28,
    );
}

#[test]
fn test_duplicate_choice() {
    let err = parse_err("{N, select, a{1} a{2} other{3}}");
    assert!(matches!(
        err.kind,
        ParseErrorKind::DuplicateChoice { ref name } if name == "a"
    ));
}

// =============================================================================
// Extensions
// =============================================================================

#[test]
fn test_extension_outside_plural() {
    assert_error(
        "{N, select, offset:1 one{#} other {#}}",
        ParseErrorKind::UnexpectedExtension,
        18,
    );
    assert_error(
        "{N, selectordinal, offset:1 one{#} other {#}}",
        ParseErrorKind::UnexpectedExtension,
        25,
    );
}

#[test]
fn test_offset_after_first_choice() {
    let err = parse_err("{N, plural, one{#} offset:1 other{#}}");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedExtension);
}

#[test]
fn test_unsupported_extension() {
    assert_error(
        "{N, plural, factor:1 one{#} other {#}}",
        ParseErrorKind::UnsupportedExtension {
            name: "factor".into(),
        },
        18,
    );
}

#[test]
fn test_offset_values() {
    assert_error("{N, plural, offset:}", ParseErrorKind::MissingOffsetValue, 19);
    assert_error("{N, plural, offset: one{#} other {#}}", ParseErrorKind::BadCast, 23);
    assert_error("{N, plural, offset:A one{#} other {#}}", ParseErrorKind::BadCast, 20);
    assert_error("{N, plural, offset:1.0 one{#} other {#}}", ParseErrorKind::BadCast, 22);
    assert_error(
        "{N, plural, offset:-1 one{#} other {#}}",
        ParseErrorKind::InvalidOffsetValue,
        21,
    );
}

// =============================================================================
// Dates
// =============================================================================

#[test]
fn test_invalid_date_format() {
    let err = parse_err("{D, date, tiny}");
    assert_eq!(err.kind, ParseErrorKind::InvalidDateFormat);
    assert_error("{D, date}", ParseErrorKind::MalformedOption, 8);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_error_display() {
    insta::assert_snapshot!(parse_err("{N").to_string(), @"ParseError: `UnbalancedBraces` at 2");
    insta::assert_snapshot!(
        parse_err("{ N, SELECT, other {#} }").to_string(),
        @"ParseError: `UnknownType: `SELECT`` at 11"
    );
    insta::assert_snapshot!(
        parse_err("{N, plural, factor:1 one{#} other {#}}").to_string(),
        @"ParseError: `UnsupportedExtension: `factor`` at 18"
    );
}
