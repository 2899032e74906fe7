//! Currencies offered by the conversion form.

use serde::Serialize;

/// A currency the form lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedCurrency {
    /// ISO 4217 code.
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
}

/// The catalogue, in display order. Conversion is not limited to it.
pub const SUPPORTED_CURRENCIES: &[SupportedCurrency] = &[
    SupportedCurrency { code: "EUR", name: "Euro" },
    SupportedCurrency { code: "USD", name: "US Dollar" },
    SupportedCurrency { code: "XOF", name: "CFA Franc" },
    SupportedCurrency { code: "GBP", name: "Pound Sterling" },
    SupportedCurrency { code: "JPY", name: "Yen" },
    SupportedCurrency { code: "CHF", name: "Swiss Franc" },
    SupportedCurrency { code: "AUD", name: "Australian Dollar" },
];
