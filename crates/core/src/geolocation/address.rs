//! Address queries and geocoding results.

use geoconvert_shared::{AppError, AppResult};
use serde::Deserialize;
use serde_json::Value;

/// A non-blank address to geocode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    address: String,
}

impl AddressQuery {
    /// Builds a query from a body `{ address }`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the address is missing, not a string,
    /// or blank.
    pub fn from_json(body: &Value) -> AppResult<Self> {
        body.get("address")
            .and_then(Value::as_str)
            .map_or_else(|| Err(AppError::validation("Address is missing.")), Self::new)
    }

    /// Builds a query from a raw address.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the address is blank.
    pub fn new(address: &str) -> AppResult<Self> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AppError::validation("Address is missing."));
        }
        Ok(Self {
            address: address.to_string(),
        })
    }

    /// The trimmed address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.address
    }
}

/// One geocoding search hit. Only the country matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodedPlace {
    /// Structured address details, present when requested.
    #[serde(default)]
    pub address: Option<GeocodedAddress>,
}

/// Structured address details of a geocoding hit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodedAddress {
    /// ISO 3166-1 alpha-2 code, lowercase in provider output.
    #[serde(default)]
    pub country_code: Option<String>,
}

impl GeocodedPlace {
    /// Uppercased country code, `None` when absent or blank.
    #[must_use]
    pub fn country_code(&self) -> Option<String> {
        self.address
            .as_ref()?
            .country_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_uppercase)
    }
}
