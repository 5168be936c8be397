//!
//! A single measured value.
//!

use crate::util::round::round_if_needed;

///
/// A single measured value.
///
/// Reports are expected to contain numbers only, but any other JSON value is
/// kept as is and displayed verbatim.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// A numeric value, with integers kept exact.
    Number(serde_json::Number),
    /// A non-numeric value.
    Other(serde_json::Value),
}

impl Quantity {
    ///
    /// Returns the value rounded for display.
    ///
    /// Integers and non-numeric values are returned unchanged.
    ///
    pub fn rounded(&self) -> Self {
        match self {
            Self::Number(number) if number.is_f64() => number
                .as_f64()
                .map(round_if_needed)
                .and_then(serde_json::Number::from_f64)
                .map_or_else(|| self.clone(), Self::Number),
            _ => self.clone(),
        }
    }

    ///
    /// Returns the exact integer value, if the number is an integer.
    ///
    fn integer(number: &serde_json::Number) -> Option<i128> {
        number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from))
    }

    ///
    /// Compares two numbers by value, so that `700` equals `700.0`.
    ///
    fn numbers_equal(first: &serde_json::Number, second: &serde_json::Number) -> bool {
        match (Self::integer(first), Self::integer(second)) {
            (Some(first), Some(second)) => first == second,
            (Some(integer), None) => second
                .as_f64()
                .is_some_and(|float| Self::float_equals_integer(float, integer)),
            (None, Some(integer)) => first
                .as_f64()
                .is_some_and(|float| Self::float_equals_integer(float, integer)),
            (None, None) => first.as_f64() == second.as_f64(),
        }
    }

    ///
    /// Whether a float is exactly the given integer.
    ///
    fn float_equals_integer(float: f64, integer: i128) -> bool {
        float.trunc() == float
            && float >= i128::MIN as f64
            && float < i128::MAX as f64
            && float as i128 == integer
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(first), Self::Number(second)) => Self::numbers_equal(first, second),
            (Self::Other(first), Self::Other(second)) => first == second,
            _ => false,
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map_or(Self::Other(serde_json::Value::Null), Self::Number)
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => match number.as_f64() {
                Some(float) if number.is_f64() => write!(f, "{float}"),
                _ => write!(f, "{number}"),
            },
            Self::Other(serde_json::Value::Null) => Ok(()),
            Self::Other(serde_json::Value::String(value)) => write!(f, "{value}"),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}
