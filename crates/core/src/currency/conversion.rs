//! Conversion request normalization and validation.

use geoconvert_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::amount::{coerce_amount, format_amount};

/// A validated request to convert `amount` from one currency to another.
///
/// Codes are uppercase and non-empty, amount is strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    from_currency: String,
    to_currency: String,
    amount: Decimal,
}

impl ConversionRequest {
    /// Builds a request from a form body `{ fromCurrency, toCurrency, amount }`.
    ///
    /// Non-string codes count as empty; the amount is coerced with
    /// [`coerce_amount`]. Any body that is not an object has no fields.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when a code is empty or the amount is not
    /// a strictly positive number `Decimal` can hold.
    pub fn from_json(body: &Value) -> AppResult<Self> {
        let from_currency = currency_code(body.get("fromCurrency"));
        let to_currency = currency_code(body.get("toCurrency"));
        let amount = coerce_amount(body.get("amount"))
            .map_err(|e| AppError::validation(e.to_string()))?;

        Self::new(from_currency, to_currency, amount)
    }

    /// Builds a request from already typed values, normalizing the codes.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` on an empty code or a non-positive amount.
    pub fn new(
        from_currency: impl AsRef<str>,
        to_currency: impl AsRef<str>,
        amount: Decimal,
    ) -> AppResult<Self> {
        let from_currency = from_currency.as_ref().to_uppercase();
        let to_currency = to_currency.as_ref().to_uppercase();

        if from_currency.is_empty() {
            return Err(AppError::validation("Source currency is missing."));
        }
        if to_currency.is_empty() {
            return Err(AppError::validation("Target currency is missing."));
        }
        if amount <= Decimal::ZERO {
            return Err(AppError::validation("Amount must be greater than zero."));
        }

        Ok(Self {
            from_currency,
            to_currency,
            amount,
        })
    }

    /// Source currency code.
    #[must_use]
    pub fn from_currency(&self) -> &str {
        &self.from_currency
    }

    /// Target currency code.
    #[must_use]
    pub fn to_currency(&self) -> &str {
        &self.to_currency
    }

    /// Amount to convert.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Amount as it appears in an upstream URL: `12.50` becomes `12.5`.
    #[must_use]
    pub fn amount_segment(&self) -> String {
        self.amount.normalize().to_string()
    }
}

/// Reads a currency code field: uppercase string, empty when not a string.
#[must_use]
pub fn currency_code(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_uppercase)
        .unwrap_or_default()
}

/// Successful conversion as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted amount with exactly two fractional digits.
    pub result: String,
}

impl ConversionResult {
    /// Formats a converted amount.
    #[must_use]
    pub fn from_amount(converted: Decimal) -> Self {
        Self {
            result: format_amount(converted),
        }
    }
}
