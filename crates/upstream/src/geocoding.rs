//! Address geocoding provider (OpenStreetMap Nominatim search).
//!
//! The provider's usage policy requires an identifying `User-Agent`; the
//! shared HTTP client sends the configured one with every request.

use geoconvert_core::geolocation::{AddressQuery, GeocodedPlace};
use geoconvert_shared::UpstreamError;
use reqwest::{Client, Url};
use tracing::debug;

use crate::http::{SetupError, get_json, parse_base_url, with_segments};

/// Provider name used in errors and logs.
pub const PROVIDER: &str = "geocoding";

/// Client for the geocoding provider.
#[derive(Clone)]
pub struct GeocodingClient {
    http: Client,
    base_url: Url,
}

impl GeocodingClient {
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

    /// Resolves an address to the uppercase country code of the best match.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::NotFound` when the search has no result,
    /// `UpstreamError::MissingField` when the match has no country code, or a
    /// transport/status/decode error.
    pub async fn country_code(&self, query: &AddressQuery) -> Result<String, UpstreamError> {
        let url = with_segments(PROVIDER, &self.base_url, ["search"])?;
        let request = self.http.get(url).query(&[
            ("q", query.as_str()),
            ("format", "json"),
            ("addressdetails", "1"),
            ("limit", "1"),
        ]);

        debug!(provider = PROVIDER, "Geocoding address");
        let places: Vec<GeocodedPlace> = get_json(PROVIDER, request).await?;

        let place = places.first().ok_or_else(|| UpstreamError::NotFound {
            provider: PROVIDER,
            what: "address".to_string(),
        })?;

        place.country_code().ok_or(UpstreamError::MissingField {
            provider: PROVIDER,
            field: "address.country_code",
        })
    }
}
