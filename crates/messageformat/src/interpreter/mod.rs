//! Message formatting.
//!
//! This module provides the evaluation engine that takes parse trees and
//! produces formatted strings. It resolves `select`, `plural` and
//! `selectordinal` choices, substitutes values, and dispatches registered
//! kinds to their format functions.

mod coerce;
mod context;
mod date;
mod error;
mod evaluator;
mod formatter;
mod plural;
mod registry;

pub use coerce::{Booleans, to_number, to_string, value_to_string};
pub use context::EvalContext;
pub use date::{DATE_LOCALES, DateFormatter, EnglishDates, GermanDates, date_formatter_for};
pub use error::{ConfigError, FormatError};
pub use evaluator::eval_tree;
pub use formatter::{DEFAULT_CULTURE, Formatter};
pub use plural::{CategorySelector, CldrPluralRules, SUPPORTED_LANGUAGES, plural_category};
pub use registry::{
    FormatFn, KindRegistry, ParseFn, RESERVED_KINDS, RegisteredKind, format_fn, parse_fn,
};
