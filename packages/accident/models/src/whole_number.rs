//! Serde helpers for whole numbers that may arrive as floats.
//!
//! Tabular exports write integer columns as `10.0` whenever the column has
//! a float dtype. These helpers accept integers and integral floats, and
//! reject fractions, non-finite values and out-of-range numbers.

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Visitor};

struct WholeNumberVisitor;

impl Visitor<'_> for WholeNumberVisitor {
    type Value = i128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a whole number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i128, E> {
        Ok(i128::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i128, E> {
        Ok(i128::from(v))
    }

    #[allow(
        clippy::float_cmp,
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss
    )]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i128, E> {
        if v.is_finite() && v.trunc() == v && v.abs() <= u64::MAX as f64 {
            Ok(v as i128)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }
}

/// Deserializes a non-negative whole number into a `u64`.
///
/// # Errors
///
/// Returns an error for negative, fractional or oversized values.
pub fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = deserializer.deserialize_any(WholeNumberVisitor)?;
    u64::try_from(value)
        .map_err(|_| de::Error::custom(format!("expected a non-negative count, got {value}")))
}

/// Deserializes a whole number into an `i64`.
///
/// # Errors
///
/// Returns an error for fractional or out-of-range values.
pub fn deserialize_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = deserializer.deserialize_any(WholeNumberVisitor)?;
    i64::try_from(value)
        .map_err(|_| de::Error::custom(format!("whole number {value} is out of range")))
}
