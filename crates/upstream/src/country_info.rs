//! Country info provider (REST Countries).
//!
//! `GET {base}/alpha/{CODE}?fields=currencies` answers with either a single
//! country or an array of countries; the core adapter reduces both shapes.

use geoconvert_core::geolocation::first_currency_code;
use geoconvert_shared::UpstreamError;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::http::{SetupError, get_json, parse_base_url, with_segments};

/// Provider name used in errors and logs.
pub const PROVIDER: &str = "country-info";

/// Client for the country info provider.
#[derive(Clone)]
pub struct CountryInfoClient {
    http: Client,
    base_url: Url,
}

impl CountryInfoClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(http: Client, base_url: &str) -> Result<Self, SetupError> {
        Ok(Self {
            http,
            base_url: parse_base_url(PROVIDER, base_url)?,
        })
    }

    /// Returns the first currency listed for a country.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::MissingField` when no currency is listed, or a
    /// transport/status/decode error.
    pub async fn currency_code(&self, country_code: &str) -> Result<String, UpstreamError> {
        let url = with_segments(PROVIDER, &self.base_url, ["alpha", country_code])?;
        let request = self.http.get(url).query(&[("fields", "currencies")]);

        debug!(provider = PROVIDER, country_code, "Fetching country currencies");
        let payload: Value = get_json(PROVIDER, request).await?;

        first_currency_code(&payload).ok_or(UpstreamError::MissingField {
            provider: PROVIDER,
            field: "currencies",
        })
    }
}
