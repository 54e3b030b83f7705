//! Locale-specific date rendering for `date` expressions.

use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime};

use crate::interpreter::ConfigError;
use crate::parser::DateWidth;

/// Renders a timestamp at one of the four widths.
pub trait DateFormatter: Send + Sync {
    fn format(&self, date: &NaiveDateTime, width: DateWidth) -> String;
}

/// Month and weekday names for one language.
struct Names {
    months: [&'static str; 12],
    /// Monday first.
    weekdays: [&'static str; 7],
}

impl Names {
    fn month(&self, date: &NaiveDateTime) -> &'static str {
        self.months[date.month0() as usize]
    }

    fn weekday(&self, date: &NaiveDateTime) -> &'static str {
        self.weekdays[date.weekday().num_days_from_monday() as usize]
    }
}

const ENGLISH: Names = Names {
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
};

const GERMAN: Names = Names {
    months: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    weekdays: [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
};

/// US English: `10/16/1996`, `October 16, 1996`,
/// `Wednesday October 16, 1996`, `Wednesday, October 16, 1996`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDates;

impl DateFormatter for EnglishDates {
    fn format(&self, date: &NaiveDateTime, width: DateWidth) -> String {
        let (day, year) = (date.day(), date.year());
        match width {
            DateWidth::Short => format!("{}/{day}/{year}", date.month()),
            DateWidth::Medium => format!("{} {day}, {year}", ENGLISH.month(date)),
            DateWidth::Long => format!(
                "{} {} {day}, {year}",
                ENGLISH.weekday(date),
                ENGLISH.month(date)
            ),
            DateWidth::Full => format!(
                "{}, {} {day}, {year}",
                ENGLISH.weekday(date),
                ENGLISH.month(date)
            ),
        }
    }
}

/// German: `16.10.1996`, `16. Oktober 1996`, `Mittwoch 16. Oktober 1996`,
/// `Mittwoch, 16. Oktober 1996`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanDates;

impl DateFormatter for GermanDates {
    fn format(&self, date: &NaiveDateTime, width: DateWidth) -> String {
        let (day, year) = (date.day(), date.year());
        match width {
            DateWidth::Short => format!("{day}.{}.{year}", date.month()),
            DateWidth::Medium => format!("{day}. {} {year}", GERMAN.month(date)),
            DateWidth::Long => format!(
                "{} {day}. {} {year}",
                GERMAN.weekday(date),
                GERMAN.month(date)
            ),
            DateWidth::Full => format!(
                "{}, {day}. {} {year}",
                GERMAN.weekday(date),
                GERMAN.month(date)
            ),
        }
    }
}

/// Date locales `date_formatter_for` resolves.
pub const DATE_LOCALES: &[&str] = &["en", "de"];

/// The date formatter for a locale identifier.
///
/// Matches on the language subtag, so `en-US` and `de_AT` resolve too.
///
/// # Errors
///
/// `UnknownDateLocale` for any other language.
pub fn date_formatter_for(id: &str) -> Result<Arc<dyn DateFormatter>, ConfigError> {
    let language = id
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match language.as_str() {
        "en" => Ok(Arc::new(EnglishDates)),
        "de" => Ok(Arc::new(GermanDates)),
        _ => Err(ConfigError::UnknownDateLocale {
            name: id.to_string(),
        }),
    }
}
