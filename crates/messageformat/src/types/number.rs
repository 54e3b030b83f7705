use std::fmt;

/// A numeric operand for plural and ordinal selection.
///
/// Integers keep their exact value; only arithmetic that would overflow
/// widens to a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A signed integer.
    Int(i64),
    /// An unsigned integer too large (or explicitly typed) for `Int`.
    UInt(u64),
    /// A floating-point number.
    Float(f64),
}

impl Number {
    /// Subtract a plural offset from this number.
    ///
    /// ```
    /// use messageformat::Number;
    ///
    /// assert_eq!(Number::Int(3).minus(1), Number::Int(2));
    /// assert_eq!(Number::UInt(0).minus(2), Number::Int(-2));
    /// assert_eq!(Number::Float(2.5).minus(1), Number::Float(1.5));
    /// ```
    pub fn minus(self, offset: u64) -> Number {
        match self {
            Number::Int(n) => i64::try_from(offset)
                .ok()
                .and_then(|o| n.checked_sub(o))
                .map_or_else(|| Number::Float(n as f64 - offset as f64), Number::Int),
            Number::UInt(n) if n >= offset => Number::UInt(n - offset),
            Number::UInt(n) => i64::try_from(offset - n)
                .map_or_else(|_| Number::Float(n as f64 - offset as f64), |d| Number::Int(-d)),
            Number::Float(f) => Number::Float(f - offset as f64),
        }
    }

    /// Returns the value as an `f64`, possibly losing precision.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::UInt(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    /// Returns the value as an `i64` if it is integral and in range.
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(n),
            Number::UInt(n) => i64::try_from(n).ok(),
            Number::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }
}

/// Canonical decimal rendering: integers as plain digits, floats as the
/// shortest representation that round-trips, never in exponent notation.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::UInt(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::UInt(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}
