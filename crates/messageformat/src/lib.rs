//! ICU-style message templates: parsing and formatting.
//!
//! A template embeds `{name}` variables and `plural`, `select`,
//! `selectordinal` and `date` expressions in literal text. Templates are
//! parsed once into a [`ParseTree`] and formatted any number of times against
//! an argument map.
//!
//! ```
//! use messageformat::{Formatter, params, parse};
//!
//! let tree = parse("{N, plural, =0{no files} one{# file} other{# files}}").unwrap();
//! let formatter = Formatter::default();
//!
//! assert_eq!(formatter.format_map(&tree, &params! { "N" => 0 }).unwrap(), "no files");
//! assert_eq!(formatter.format_map(&tree, &params! { "N" => 1 }).unwrap(), "1 file");
//! assert_eq!(formatter.format_map(&tree, &params! { "N" => 7 }).unwrap(), "7 files");
//! ```

use std::collections::HashMap;

use thiserror::Error;

pub mod interpreter;
mod message;
pub mod parser;
pub mod types;

pub use interpreter::{
    Booleans, CategorySelector, CldrPluralRules, ConfigError, FormatError, Formatter,
    KindRegistry,
};
pub use message::Message;
pub use parser::{ParseError, ParseErrorKind, ParseTree, Parser, parse};
pub use types::{Number, Value};

/// Arguments for one formatting call, keyed by variable name.
pub type Args = HashMap<String, Value>;

/// Any error from [`format_message`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Parse and format a template in one step, with English rules.
///
/// ```
/// use messageformat::{format_message, params};
///
/// let out = format_message("Hello {name}!", &params! { "name" => "Ada" }).unwrap();
/// assert_eq!(out, "Hello Ada!");
/// ```
pub fn format_message(input: &str, args: &Args) -> Result<String, Error> {
    let tree = parse(input)?;
    Ok(Formatter::default().format_map(&tree, args)?)
}

/// Creates an [`Args`] map from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, booleans or timestamps directly.
///
/// # Example
///
/// ```
/// use messageformat::{Number, params};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(Number::Int(3)));
/// assert_eq!(p["name"].as_str(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Args::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Args::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
