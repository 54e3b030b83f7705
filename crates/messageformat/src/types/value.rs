use std::collections::BTreeMap;
use std::fmt::{self, Display, Write};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use super::Number;

/// A runtime value bound to a message argument.
///
/// The `Value` enum is the dynamic type system of the data context: strings,
/// booleans, numbers of any width, calendar timestamps, durations, and
/// anything with a textual representation can be passed interchangeably.
///
/// # Example
///
/// ```
/// use messageformat::{Number, Value};
///
/// let count: Value = 42.into();
/// assert_eq!(count.as_number(), Some(Number::Int(42)));
///
/// let name: Value = "Alice".into();
/// assert_eq!(name.as_str(), Some("Alice"));
///
/// let missing: Value = Option::<i32>::None.into();
/// assert!(missing.is_null());
/// ```
#[derive(Clone)]
pub enum Value {
    /// No value. Renders as an empty string.
    Null,

    /// A boolean.
    Bool(bool),

    /// A string value.
    String(String),

    /// A number of any width.
    Number(Number),

    /// A duration, rendered as `87672h0m0s`, `1.5s`, `250ms`.
    Duration(Duration),

    /// A calendar timestamp, the only value a `date` expression accepts.
    DateTime(NaiveDateTime),

    /// A value with its own textual representation.
    Display(Arc<dyn Display + Send + Sync>),

    /// A list of values (e.g. a JSON array). Not renderable.
    List(Vec<Value>),

    /// A map of values (e.g. a JSON object). Not renderable.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Wrap any displayable value.
    pub fn display(value: impl Display + Send + Sync + 'static) -> Self {
        Value::Display(Arc::new(value))
    }

    /// Name of this value's type, used in `InvalidArgType` errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Number(Number::Int(_)) => "integer",
            Value::Number(Number::UInt(_)) => "unsigned integer",
            Value::Number(Number::Float(_)) => "float",
            Value::Duration(_) => "duration",
            Value::DateTime(_) => "datetime",
            Value::Display(_) => "display",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns true for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a timestamp, if it is one.
    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Duration(d) => f.debug_tuple("Duration").field(d).finish(),
            Value::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
            Value::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
        }
    }
}

/// Render a duration with the largest units first and a trimmed fraction:
/// `1h2m3.5s`, `1.5ms`, `0s`.
pub(crate) fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{nanos}ns");
    }
    if nanos < 1_000_000 {
        return format!("{}µs", decimal(nanos, 1_000));
    }
    if nanos < 1_000_000_000 {
        return format!("{}ms", decimal(nanos, 1_000_000));
    }

    let secs = duration.as_secs();
    let hours = secs.div_euclid(3600);
    let minutes = secs.rem_euclid(3600).div_euclid(60);
    let seconds = u128::from(secs.rem_euclid(60)) * 1_000_000_000
        + u128::from(duration.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h{minutes}m");
    } else if minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    out.push_str(&decimal(seconds, 1_000_000_000));
    out.push('s');
    out
}

/// `value / unit` as a decimal string with trailing fraction zeros removed.
fn decimal(value: u128, unit: u128) -> String {
    let whole = value.div_euclid(unit);
    let fraction = value.rem_euclid(unit);
    if fraction == 0 {
        return whole.to_string();
    }
    let width = unit.ilog10() as usize;
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

// From implementations for common types

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(Number::Int(i64::from(n)))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(Number::UInt(u64::from(n)))
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Number(Number::Int(n as i64))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(Number::UInt(n as u64))
    }
}

impl From<f32> for Value {
    /// Widens through the shortest decimal form so `3.14f32` stays `3.14`.
    fn from(n: f32) -> Self {
        let widened = n.to_string().parse::<f64>().unwrap_or(f64::from(n));
        Value::Number(Number::Float(widened))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::Float(n))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::DateTime(date.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(dt: DateTime<Tz>) -> Self {
        Value::DateTime(dt.naive_local())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Number(Number::UInt(u))
                } else {
                    Value::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
