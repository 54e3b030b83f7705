//! Tests for formatter construction and configuration.

use std::sync::Arc;
use std::thread;

use messageformat::interpreter::{SUPPORTED_LANGUAGES, plural_category};
use messageformat::{
    CategorySelector, CldrPluralRules, ConfigError, Formatter, Message, Number, format_message,
    params, parse,
};

// =============================================================================
// Cultures
// =============================================================================

#[test]
fn test_default_culture_is_english() {
    let formatter = Formatter::default();
    assert_eq!(formatter.culture(), Some("en"));
    assert_eq!(formatter.date_locale(), "en");
    assert!(formatter.has_selector());
}

#[test]
fn test_builder_culture() {
    let formatter = Formatter::builder().culture("ru").build().unwrap();
    let tree = parse("{N, plural, one{# файл} few{# файла} many{# файлов} other{# файла}}").unwrap();
    let cases = [(1, "1 файл"), (3, "3 файла"), (5, "5 файлов"), (21, "21 файл")];
    for (n, expected) in cases {
        assert_eq!(formatter.format_map(&tree, &params! { "N" => n }).unwrap(), expected);
    }
}

#[test]
fn test_unknown_culture_suggests_languages() {
    let err = Formatter::builder().culture("ez").build().unwrap_err();
    let ConfigError::UnknownCulture { name, suggestions } = &err else {
        panic!("expected UnknownCulture, got {err:?}");
    };
    assert_eq!(name, "ez");
    assert!(suggestions.contains(&"en".to_string()));
    assert!(err.to_string().starts_with("unknown culture 'ez'; did you mean: "));
}

#[test]
fn test_culture_uses_language_subtag() {
    let rules = CldrPluralRules::try_new("pt-BR").unwrap();
    assert_eq!(rules.language(), "pt");
    assert!(CldrPluralRules::try_new("not a locale").is_err());
}

#[test]
fn test_set_culture() {
    let tree = parse("{N, plural, one{one} other{other}}").unwrap();
    let mut formatter = Formatter::default();
    assert_eq!(formatter.format_map(&tree, &params! { "N" => 0 }).unwrap(), "other");

    // French treats 0 as singular.
    formatter.set_culture("fr").unwrap();
    assert_eq!(formatter.culture(), Some("fr"));
    assert_eq!(formatter.format_map(&tree, &params! { "N" => 0 }).unwrap(), "one");

    assert!(formatter.set_culture("xx").is_err());
    assert_eq!(formatter.culture(), Some("fr"));
}

#[test]
fn test_plural_category_helper() {
    assert_eq!(plural_category("en", &Number::Int(1), false), "one");
    assert_eq!(plural_category("en", &Number::Int(3), true), "few");
    assert_eq!(plural_category("ar", &Number::Int(0), false), "zero");
    assert_eq!(plural_category("ru", &Number::Float(1.5), false), "other");
    assert!(SUPPORTED_LANGUAGES.contains(&"de"));
}

// =============================================================================
// Custom selectors
// =============================================================================

#[test]
fn test_set_plural_function() {
    let mut message = Message::new("{N,plural,one{1}other{2}}").unwrap();
    assert_eq!(
        message.set_plural_function(None),
        Err(ConfigError::PluralFunctionRequired)
    );

    let args = params! { "N" => 1 };
    assert_eq!(message.format_map(&args).unwrap(), "1");

    let always_other: Arc<dyn CategorySelector> = Arc::new(|_: &Number, _: bool| "other");
    message.set_plural_function(Some(always_other)).unwrap();
    assert_eq!(message.format_map(&args).unwrap(), "2");
    assert_eq!(message.formatter().culture(), None);
}

#[test]
fn test_selector_takes_precedence_over_culture() {
    let formatter = Formatter::builder()
        .culture("xx")
        .selector(Arc::new(|_: &Number, _: bool| "one"))
        .build()
        .unwrap();
    let tree = parse("{N, plural, one{picked} other{missed}}").unwrap();
    assert_eq!(
        formatter.format_map(&tree, &params! { "N" => 9 }).unwrap(),
        "picked"
    );
}

#[test]
fn test_selector_receives_adjusted_number() {
    let formatter = Formatter::builder()
        .selector(Arc::new(|n: &Number, _: bool| {
            if *n == Number::Int(4) { "few" } else { "other" }
        }))
        .build()
        .unwrap();
    let tree = parse("{N, plural, offset:2 few{four} other{#}}").unwrap();
    assert_eq!(
        formatter.format_map(&tree, &params! { "N" => 6 }).unwrap(),
        "four"
    );
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn test_formatter_shared_across_threads() {
    let formatter = Arc::new(Formatter::builder().culture("de").build().unwrap());
    let tree = Arc::new(parse("{N, plural, one{# Datei} other{# Dateien}}").unwrap());

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let formatter = Arc::clone(&formatter);
            let tree = Arc::clone(&tree);
            thread::spawn(move || formatter.format_map(&tree, &params! { "N" => n }).unwrap())
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["1 Datei", "2 Dateien", "3 Dateien", "4 Dateien"]);
}

#[test]
fn test_format_message_helper() {
    assert_eq!(
        format_message("{N, plural, one{# day} other{# days}}", &params! { "N" => 2 }).unwrap(),
        "2 days"
    );
    assert!(matches!(
        format_message("{N", &params! {}),
        Err(messageformat::Error::Parse(_))
    ));
    assert!(matches!(
        format_message("{N}", &params! { "N" => true }),
        Err(messageformat::Error::Format(_))
    ));
}
