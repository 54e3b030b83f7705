//! CLDR plural category resolution.
//!
//! This module provides plural category resolution following CLDR rules.
//! Different languages have different plural rules - English has "one" and "other",
//! while Russian has "one", "few", "many", and "other", and Arabic uses all six
//! categories: "zero", "one", "two", "few", "many", "other". Ordinal rules
//! differ again: English ordinals use "one", "two", "few" and "other" (1st,
//! 2nd, 3rd, 4th).
//!
//! Plural rules are cached per thread per language and rule type to avoid
//! re-creating `PluralRules` instances on every call. The cache is initialized
//! lazily on first access within each thread.

use std::borrow::Cow;
use std::cell::RefCell;

use fixed_decimal::Decimal;
use icu_locale_core::Locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use crate::interpreter::ConfigError;
use crate::parser::compute_suggestions;
use crate::types::Number;

/// Supported language codes for plural rule resolution.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl", "pl",
    "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code and ordinal flag.
    static PLURAL_RULES_CACHE: RefCell<Vec<((&'static str, bool), Option<PluralRules>)>> =
        const { RefCell::new(Vec::new()) };
}

/// Maps a number to a plural category name.
///
/// `ordinal` selects ordinal rules (`selectordinal`) instead of cardinal ones
/// (`plural`). Any `Fn(&Number, bool) -> impl Into<Cow<'static, str>>` is a
/// selector, so tests and callers can inject rules directly:
///
/// ```
/// use messageformat::{CategorySelector, Number};
///
/// let always_other = |_: &Number, _: bool| "other";
/// assert_eq!(always_other.category(&Number::Int(1), false), "other");
/// ```
pub trait CategorySelector: Send + Sync {
    fn category(&self, number: &Number, ordinal: bool) -> Cow<'static, str>;
}

impl<F, R> CategorySelector for F
where
    F: Fn(&Number, bool) -> R + Send + Sync,
    R: Into<Cow<'static, str>>,
{
    fn category(&self, number: &Number, ordinal: bool) -> Cow<'static, str> {
        self(number, ordinal).into()
    }
}

/// CLDR cardinal and ordinal rules for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CldrPluralRules {
    language: &'static str,
}

impl CldrPluralRules {
    /// Rules for a locale identifier such as `en`, `de-AT` or `ru`.
    ///
    /// Only the language subtag is used.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCulture` if the identifier does not parse or its
    /// language has no rules.
    pub fn try_new(id: &str) -> Result<Self, ConfigError> {
        let unknown = || ConfigError::UnknownCulture {
            name: id.to_string(),
            suggestions: compute_suggestions(id, SUPPORTED_LANGUAGES),
        };
        let locale: Locale = id.parse().map_err(|_| unknown())?;
        let language = locale.id.language.as_str();
        SUPPORTED_LANGUAGES
            .iter()
            .find(|&&code| code == language)
            .map(|&language| Self { language })
            .ok_or_else(unknown)
    }

    /// English rules.
    pub fn english() -> Self {
        Self { language: "en" }
    }

    /// The language code these rules apply to.
    pub fn language(&self) -> &'static str {
        self.language
    }
}

impl Default for CldrPluralRules {
    fn default() -> Self {
        Self::english()
    }
}

impl CategorySelector for CldrPluralRules {
    fn category(&self, number: &Number, ordinal: bool) -> Cow<'static, str> {
        Cow::Borrowed(plural_category(self.language, number, ordinal))
    }
}

/// Build `PluralRules` for a supported language code.
fn build_rules(lang: &'static str, ordinal: bool) -> Option<PluralRules> {
    let locale: Locale = lang.parse().ok()?;
    let rule_type = if ordinal {
        PluralRuleType::Ordinal
    } else {
        PluralRuleType::Cardinal
    };
    PluralRules::try_new(locale.into(), rule_type.into()).ok()
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Categorize a number with already-built rules.
///
/// Integral values go through `i64`/`u64`; fractional ones through their
/// canonical decimal form so fraction digits reach the plural operands.
/// Negative values are always "other": `-1 tasks`, never `-1 task`.
fn categorize(rules: &PluralRules, number: &Number) -> PluralCategory {
    if number.as_f64() < 0.0 {
        return PluralCategory::Other;
    }
    if let Some(n) = number.as_integer() {
        return rules.category_for(n);
    }
    match number {
        Number::UInt(n) => rules.category_for(*n),
        _ => match number.to_string().parse::<Decimal>() {
            Ok(decimal) => rules.category_for(&decimal),
            Err(_) => PluralCategory::Other,
        },
    }
}

/// Get the CLDR plural category for a number in a given language.
///
/// Returns one of: "zero", "one", "two", "few", "many", "other".
/// Negative numbers are "other" in every language.
/// Rules are cached per thread per language, so repeated calls with the same
/// language code reuse the previously constructed `PluralRules`.
///
/// # Examples
///
/// ```
/// use messageformat::Number;
/// use messageformat::interpreter::plural_category;
///
/// // English: 1 = "one", everything else = "other"
/// assert_eq!(plural_category("en", &Number::Int(1), false), "one");
/// assert_eq!(plural_category("en", &Number::Int(2), false), "other");
///
/// // English ordinals: 1st, 2nd, 3rd, 4th
/// assert_eq!(plural_category("en", &Number::Int(2), true), "two");
/// assert_eq!(plural_category("en", &Number::Int(13), true), "other");
///
/// // Russian: complex rules for "one", "few", "many", "other"
/// assert_eq!(plural_category("ru", &Number::Int(2), false), "few");
/// assert_eq!(plural_category("ru", &Number::Int(5), false), "many");
/// ```
pub fn plural_category(lang: &'static str, number: &Number, ordinal: bool) -> &'static str {
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        let key = (lang, ordinal);
        if let Some((_, rules)) = cache.iter().find(|(k, _)| *k == key) {
            return rules
                .as_ref()
                .map_or("other", |rules| category_str(categorize(rules, number)));
        }
        let rules = build_rules(lang, ordinal);
        let category = rules
            .as_ref()
            .map_or("other", |rules| category_str(categorize(rules, number)));
        cache.push((key, rules));
        category
    })
}
