//! Detection result.

use serde::{Deserialize, Serialize};

/// A detected local currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDetection {
    /// Currency code as reported by the provider.
    pub currency: String,
}

impl CurrencyDetection {
    /// Wraps a currency code.
    #[must_use]
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}
