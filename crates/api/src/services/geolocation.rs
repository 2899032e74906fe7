//! Local currency detection pipelines.

use geoconvert_core::geolocation::{AddressQuery, CurrencyDetection};
use geoconvert_shared::{AppError, AppResult, UpstreamError};
use geoconvert_upstream::{CountryInfoClient, GeocodingClient, IpGeolocationClient};
use serde_json::Value;
use tracing::{error, info};

/// Message returned when IP-based detection fails.
pub const IP_DETECTION_FAILED: &str = "Error during IP-based geolocation.";

/// Message returned when address-based detection fails at any step.
pub const ADDRESS_DETECTION_FAILED: &str = "Error during address-based geolocation.";

/// Detects a local currency by IP or by postal address.
#[derive(Clone)]
pub struct GeolocationService {
    ip_geolocation: IpGeolocationClient,
    geocoding: GeocodingClient,
    country_info: CountryInfoClient,
}

impl GeolocationService {
    /// Creates the service.
    #[must_use]
    pub const fn new(
        ip_geolocation: IpGeolocationClient,
        geocoding: GeocodingClient,
        country_info: CountryInfoClient,
    ) -> Self {
        Self {
            ip_geolocation,
            geocoding,
            country_info,
        }
    }

    /// Detects the currency of the network the request originates from.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ExternalService` when the lookup fails or reports no
    /// currency.
    pub async fn detect_by_ip(&self) -> AppResult<CurrencyDetection> {
        match self.ip_geolocation.lookup_currency().await {
            Ok(currency) => {
                info!(%currency, "Currency detected by IP");
                Ok(CurrencyDetection::new(currency))
            }
            Err(cause) => {
                error!(provider = cause.provider(), error = %cause, "IP geolocation failed");
                Err(AppError::external_service(IP_DETECTION_FAILED, cause))
            }
        }
    }

    /// Validates a body `{ address }` and resolves the address to a currency.
    ///
    /// # Errors
    ///
    /// - `AppError::Validation` before any upstream call when the address is blank
    /// - `AppError::ExternalService` when any step fails; the step is not disclosed
    pub async fn detect_by_address(&self, body: &Value) -> AppResult<CurrencyDetection> {
        let query = AddressQuery::from_json(body)?;

        match self.resolve_address(&query).await {
            Ok(currency) => {
                info!(%currency, "Currency detected by address");
                Ok(CurrencyDetection::new(currency))
            }
            Err(cause) => {
                error!(provider = cause.provider(), error = %cause, "Address geolocation failed");
                Err(AppError::external_service(ADDRESS_DETECTION_FAILED, cause))
            }
        }
    }

    /// Address → country code → first listed currency. Stops at the first failure.
    async fn resolve_address(&self, query: &AddressQuery) -> Result<String, UpstreamError> {
        let country_code = self.geocoding.country_code(query).await?;
        self.country_info.currency_code(&country_code).await
    }
}
