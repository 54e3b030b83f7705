//! Tests for `date` expressions and date locales.

use chrono::{NaiveDate, NaiveDateTime};
use messageformat::interpreter::{DateFormatter, EnglishDates, GermanDates, date_formatter_for};
use messageformat::parser::{DateExpr, DateWidth, Node, parse};
use messageformat::{ConfigError, FormatError, Formatter, params};

fn october_16_1996() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1996, 10, 16)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_date_parses_width() {
    let tree = parse("{D, date, long}").unwrap();
    assert_eq!(
        tree.nodes,
        vec![Node::Date(DateExpr {
            key: "D".into(),
            width: DateWidth::Long,
        })]
    );
}

#[test]
fn test_date_all_widths_parse() {
    for width in ["short", "medium", "long", "full"] {
        let tree = parse(&format!("{{D, date, {width}}}")).unwrap();
        let Node::Date(date) = &tree.nodes[0] else {
            panic!("expected date node");
        };
        assert_eq!(date.width.as_str(), width);
    }
}

// =============================================================================
// English
// =============================================================================

#[test]
fn test_english_widths() {
    let date = october_16_1996();
    assert_eq!(EnglishDates.format(&date, DateWidth::Short), "10/16/1996");
    assert_eq!(EnglishDates.format(&date, DateWidth::Medium), "October 16, 1996");
    assert_eq!(
        EnglishDates.format(&date, DateWidth::Long),
        "Wednesday October 16, 1996"
    );
    assert_eq!(
        EnglishDates.format(&date, DateWidth::Full),
        "Wednesday, October 16, 1996"
    );
}

#[test]
fn test_english_date_in_message() {
    let tree = parse("Released on {D, date, medium}.").unwrap();
    let out = Formatter::default()
        .format_map(&tree, &params! { "D" => october_16_1996() })
        .unwrap();
    assert_eq!(out, "Released on October 16, 1996.");
}

// =============================================================================
// German
// =============================================================================

#[test]
fn test_german_widths() {
    let date = october_16_1996();
    assert_eq!(GermanDates.format(&date, DateWidth::Short), "16.10.1996");
    assert_eq!(GermanDates.format(&date, DateWidth::Medium), "16. Oktober 1996");
    assert_eq!(
        GermanDates.format(&date, DateWidth::Long),
        "Mittwoch 16. Oktober 1996"
    );
    assert_eq!(
        GermanDates.format(&date, DateWidth::Full),
        "Mittwoch, 16. Oktober 1996"
    );
}

#[test]
fn test_german_march_spelling() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let tree = parse("{D, date, medium}").unwrap();
    let formatter = Formatter::builder().date_locale("de").build().unwrap();
    assert_eq!(
        formatter.format_map(&tree, &params! { "D" => date }).unwrap(),
        "1. März 2024"
    );
}

#[test]
fn test_date_locale_switch() {
    let tree = parse("{D, date, short}").unwrap();
    let args = params! { "D" => october_16_1996() };
    let mut formatter = Formatter::default();
    assert_eq!(formatter.format_map(&tree, &args).unwrap(), "10/16/1996");

    formatter.set_date_locale("de-AT").unwrap();
    assert_eq!(formatter.date_locale(), "de-AT");
    assert_eq!(formatter.format_map(&tree, &args).unwrap(), "16.10.1996");
}

#[test]
fn test_date_locale_resolution() {
    assert!(date_formatter_for("en").is_ok());
    assert!(date_formatter_for("en_US").is_ok());
    assert!(date_formatter_for("DE").is_ok());
    assert_eq!(
        date_formatter_for("fr").err(),
        Some(ConfigError::UnknownDateLocale { name: "fr".into() })
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_date_rejects_non_timestamps() {
    let tree = parse("{D, date, short}").unwrap();
    let formatter = Formatter::default();

    let err = formatter
        .format_map(&tree, &params! { "D" => "1996-10-16" })
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::InvalidArgType {
            expected: "datetime",
            actual: "string".into(),
        }
    );

    let err = formatter.format(&tree).unwrap_err();
    assert_eq!(
        err,
        FormatError::InvalidArgType {
            expected: "datetime",
            actual: "absent".into(),
        }
    );
}
