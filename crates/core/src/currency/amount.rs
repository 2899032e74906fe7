//! Amount coercion and formatting.
//!
//! CRITICAL: amounts never go through `f64` arithmetic.
//! - JSON numbers are re-parsed from their textual form into `Decimal`
//! - Literals beyond `Decimal`'s range are only sign-checked as floats
//! - Results are rounded half away from zero to 2 decimal places

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Number, Value};
use thiserror::Error;

/// Number of fractional digits in a formatted conversion result.
pub const RESULT_DECIMAL_PLACES: u32 = 2;

/// Why a value could not be used as an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Not a numeric value at all.
    #[error("Amount must be a number.")]
    NotANumber,

    /// A numeric literal that is zero or negative once read.
    #[error("Amount must be greater than zero.")]
    NotPositive,

    /// A positive literal too large or too precise for a `Decimal`.
    #[error("Amount is out of range.")]
    OutOfRange,
}

/// Coerces an arbitrary JSON value into an amount, the way a form field is read.
///
/// - numbers are taken as-is
/// - strings are trimmed and parsed (empty string is zero, exponents allowed)
/// - `true` is one, `false` and `null` are zero
/// - arrays, objects and unparsable strings are not a number
///
/// A missing field behaves like `null`. In-range values are returned whatever
/// their sign; the positivity rule belongs to the caller.
///
/// # Errors
///
/// - `AmountError::NotANumber` for non-numeric input
/// - `AmountError::OutOfRange` for a positive literal `Decimal` cannot hold,
///   such as `1e30` or `1e-30`
/// - `AmountError::NotPositive` for a non-positive literal `Decimal` cannot hold
pub fn coerce_amount(value: Option<&Value>) -> Result<Decimal, AmountError> {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => Ok(Decimal::ZERO),
        Some(Value::Bool(true)) => Ok(Decimal::ONE),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Ok(Decimal::from(i)),
            (None, Some(u)) => Ok(Decimal::from(u)),
            (None, None) => parse_amount(&n.to_string()),
        },
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(Decimal::ZERO)
            } else {
                parse_amount(trimmed)
            }
        }
        Some(Value::Array(_) | Value::Object(_)) => Err(AmountError::NotANumber),
    }
}

/// Converts a JSON number into a `Decimal` without losing its written precision.
///
/// Returns `None` when the value does not fit a `Decimal`.
#[must_use]
pub fn decimal_from_number(n: &Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    parse_decimal(&n.to_string())
}

fn parse_amount(text: &str) -> Result<Decimal, AmountError> {
    match (parse_decimal(text), literal_sign(text)) {
        // Digits past the 28th decimal place round a tiny positive literal to zero.
        (Some(amount), Some(Ordering::Greater)) if amount.is_zero() => {
            Err(AmountError::OutOfRange)
        }
        (Some(amount), _) => Ok(amount),
        (None, Some(Ordering::Greater)) => Err(AmountError::OutOfRange),
        (None, Some(_)) => Err(AmountError::NotPositive),
        (None, None) => Err(AmountError::NotANumber),
    }
}

/// Parses plain (`12.5`) or scientific (`1.25e1`) notation.
fn parse_decimal(text: &str) -> Option<Decimal> {
    // Decimal::from_str tolerates digit separators, a form field does not.
    if text.contains('_') {
        return None;
    }
    if text.contains(|c: char| c == 'e' || c == 'E') {
        return Decimal::from_scientific(text).ok();
    }
    Decimal::from_str(text).ok()
}

/// Sign of a numeric literal read as a binary float.
///
/// Only digits, signs, dots and exponents are accepted, so `inf` and `NaN`
/// spellings are not numbers. Underflow to zero reads as `Equal`.
fn literal_sign(text: &str) -> Option<Ordering> {
    let numeric = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric {
        return None;
    }
    text.parse::<f64>().ok()?.partial_cmp(&0.0)
}

/// Formats a converted amount with exactly two fractional digits.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use geoconvert_core::currency::format_amount;
///
/// assert_eq!(format_amount(dec!(42.5)), "42.50");
/// assert_eq!(format_amount(dec!(1.005)), "1.01");
/// ```
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(RESULT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    // `rescale` cannot add places past 28 significant digits; the formatter pads.
    format!("{rounded:.2}")
}
