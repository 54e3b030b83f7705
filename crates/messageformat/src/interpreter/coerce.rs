//! Value coercion to strings and numbers.
//!
//! Every expression kind reads its argument through one of these functions,
//! so the type-support matrix lives here and nowhere else.

use crate::Args;
use crate::interpreter::FormatError;
use crate::types::{Number, Value, format_duration};

/// How booleans bound to `var`, `select` and pound placeholders render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Booleans {
    /// A boolean is an unsupported type: `InvalidArgType` naming `bool`.
    #[default]
    Reject,
    /// Render `"true"` / `"false"`.
    Render,
}

/// The string form of `key` in `args`.
///
/// An absent key and a `Null` value both give `""`.
pub fn to_string(args: &Args, key: &str, booleans: Booleans) -> Result<String, FormatError> {
    args.get(key)
        .map_or_else(|| Ok(String::new()), |value| value_to_string(value, booleans))
}

/// The string form of one value.
///
/// # Errors
///
/// `InvalidArgType` for lists, maps and (under [`Booleans::Reject`]) booleans.
pub fn value_to_string(value: &Value, booleans: Booleans) -> Result<String, FormatError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) if booleans == Booleans::Render => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Duration(d) => Ok(format_duration(*d)),
        Value::DateTime(dt) => Ok(dt.to_string()),
        Value::Display(d) => Ok(d.to_string()),
        Value::Bool(_) | Value::List(_) | Value::Map(_) => Err(FormatError::InvalidArgType {
            expected: "string",
            actual: value.type_name().to_string(),
        }),
    }
}

/// The numeric form of a value, for plural and ordinal selection.
///
/// Numeric strings are accepted: integers first, then base-10 floats.
///
/// ```
/// use messageformat::Number;
/// use messageformat::interpreter::to_number;
///
/// assert_eq!(to_number(&"3".into()).unwrap(), Number::Int(3));
/// assert_eq!(to_number(&"3.00".into()).unwrap(), Number::Float(3.0));
/// assert!(to_number(&"three".into()).is_err());
/// ```
pub fn to_number(value: &Value) -> Result<Number, FormatError> {
    let invalid = || FormatError::InvalidArgType {
        expected: "number",
        actual: value.type_name().to_string(),
    };
    match value {
        Value::Number(n) => Ok(*n),
        Value::String(s) => parse_number(s).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

fn parse_number(s: &str) -> Option<Number> {
    if let Ok(n) = s.parse::<i64>() {
        return Some(Number::Int(n));
    }
    if let Ok(n) = s.parse::<u64>() {
        return Some(Number::UInt(n));
    }
    s.parse::<f64>().ok().map(Number::Float)
}
