//! Tests for `selectordinal` expressions.

use std::sync::Arc;

use messageformat::parser::parse;
use messageformat::{Args, FormatError, Formatter, Number, Value, params};

const FLOOR: &str = "The {FLOOR, selectordinal, one{#st} two{#nd} few{#rd} other{#th}} floor.";

fn format(input: &str, args: &Args) -> Result<String, FormatError> {
    Formatter::default().format_map(&parse(input).unwrap(), args)
}

#[test]
fn test_ordinal_english_suffixes() {
    let cases: [(Value, &str); 9] = [
        (0i32.into(), "The 0th floor."),
        (1.0f64.into(), "The 1st floor."),
        ("2".into(), "The 2nd floor."),
        ("3.00".into(), "The 3.00rd floor."),
        (4i32.into(), "The 4th floor."),
        (11i32.into(), "The 11th floor."),
        (12i32.into(), "The 12th floor."),
        (22i32.into(), "The 22nd floor."),
        (101i32.into(), "The 101st floor."),
    ];
    for (value, expected) in cases {
        let mut args = Args::new();
        args.insert("FLOOR".into(), value);
        assert_eq!(format(FLOOR, &args).unwrap(), expected);
    }
}

#[test]
fn test_ordinal_absent_uses_other() {
    assert_eq!(format(FLOOR, &params! {}).unwrap(), "The #th floor.");
    assert_eq!(
        format(FLOOR, &params! { "FLOOR" => Value::Null }).unwrap(),
        "The #th floor."
    );
}

#[test]
fn test_ordinal_unknown_category_uses_other() {
    let input = "{N, selectordinal, one{first} other{#.}}";
    assert_eq!(format(input, &params! { "N" => 2 }).unwrap(), "2.");
}

#[test]
fn test_ordinal_rejects_offset() {
    let err = parse("{N, selectordinal, offset:1 other{#}}").unwrap_err();
    assert_eq!(err.position, 25);
}

#[test]
fn test_ordinal_bool_is_rejected() {
    let err = format(
        "{VAR,selectordinal,other{succeed}}",
        &params! { "VAR" => true },
    )
    .unwrap_err();
    assert_eq!(
        err,
        FormatError::InvalidArgType {
            expected: "number",
            actual: "bool".into(),
        }
    );
}

#[test]
fn test_ordinal_without_selector() {
    let tree = parse(FLOOR).unwrap();
    assert_eq!(
        Formatter::bare().format_map(&tree, &params! { "FLOOR" => 1 }),
        Err(FormatError::UndefinedPluralFunc)
    );
}

#[test]
fn test_ordinal_passes_ordinal_flag() {
    let formatter = Formatter::builder()
        .selector(Arc::new(|_: &Number, ordinal: bool| {
            if ordinal { "one" } else { "other" }
        }))
        .build()
        .unwrap();
    let tree = parse("{N, selectordinal, one{ordinal} other{cardinal}}").unwrap();
    assert_eq!(
        formatter.format_map(&tree, &params! { "N" => 7 }).unwrap(),
        "ordinal"
    );
}
