//! Property-based tests for conversion input handling.
//!
//! - Non-positive or non-numeric amounts never produce a request
//! - Valid input always normalizes to uppercase codes
//! - Formatting always yields exactly two fractional digits

use geoconvert_shared::AppError;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

use super::amount::format_amount;
use super::conversion::ConversionRequest;

/// Strategy to generate non-positive amounts (-1,000,000.00 to 0.00).
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..=0i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate any `Decimal`, up to `Decimal::MAX` and 28 places.
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| {
            Decimal::from_parts(lo, mid, hi, negative, scale)
        })
}

/// Strategy to generate alphabetic currency-like codes.
fn code() -> impl Strategy<Value = String> {
    "[a-zA-Z]{3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_non_positive_amount_is_invalid(
        amount in non_positive_amount(),
        from in code(),
        to in code(),
    ) {
        let body = json!({
            "fromCurrency": from,
            "toCurrency": to,
            "amount": amount.to_string(),
        });
        let result = ConversionRequest::from_json(&body);
        prop_assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn prop_non_numeric_amount_is_invalid(
        text in "[a-zA-Z]{1,12}",
        from in code(),
        to in code(),
    ) {
        let body = json!({ "fromCurrency": from, "toCurrency": to, "amount": text });
        let result = ConversionRequest::from_json(&body);
        prop_assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn prop_missing_code_is_invalid(amount in positive_amount(), code in code()) {
        let missing_from = json!({ "toCurrency": code, "amount": amount.to_string() });
        let missing_to = json!({ "fromCurrency": code, "amount": amount.to_string() });
        prop_assert!(matches!(
            ConversionRequest::from_json(&missing_from),
            Err(AppError::Validation(_))
        ));
        prop_assert!(matches!(
            ConversionRequest::from_json(&missing_to),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn prop_valid_input_normalizes(amount in positive_amount(), from in code(), to in code()) {
        let body = json!({ "fromCurrency": from, "toCurrency": to, "amount": amount.to_string() });
        let request = ConversionRequest::from_json(&body).unwrap();
        prop_assert_eq!(request.from_currency(), from.to_uppercase());
        prop_assert_eq!(request.to_currency(), to.to_uppercase());
        prop_assert_eq!(request.amount(), amount);
    }

    #[test]
    fn prop_format_has_two_decimals(value in any_decimal()) {
        let formatted = format_amount(value);
        let (_, fraction) = formatted.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
    }
}
