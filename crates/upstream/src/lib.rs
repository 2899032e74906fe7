//! HTTP clients for the upstream providers.
//!
//! This crate provides:
//! - Exchange-rate pair conversion (with a short-lived result cache)
//! - IP geolocation
//! - Address geocoding
//! - Country info lookup
//!
//! Every client maps its failures to [`UpstreamError`] tagged with the provider
//! name. Nothing here knows about HTTP status codes of *our* API.
//!
//! [`UpstreamError`]: geoconvert_shared::UpstreamError

pub mod country_info;
pub mod exchange_rate;
pub mod geocoding;
pub mod http;
pub mod ip_geolocation;

pub use country_info::CountryInfoClient;
pub use exchange_rate::ExchangeRateClient;
pub use geocoding::GeocodingClient;
pub use http::{SetupError, build_http_client};
pub use ip_geolocation::IpGeolocationClient;

use geoconvert_shared::AppConfig;

/// All upstream clients, sharing one connection pool.
#[derive(Clone)]
pub struct UpstreamClients {
    /// Exchange-rate provider.
    pub exchange_rate: ExchangeRateClient,
    /// IP geolocation provider.
    pub ip_geolocation: IpGeolocationClient,
    /// Geocoding provider.
    pub geocoding: GeocodingClient,
    /// Country info provider.
    pub country_info: CountryInfoClient,
}

impl UpstreamClients {
    /// Builds every client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or a provider URL
    /// is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, SetupError> {
        let http = build_http_client(&config.http)?;

        Ok(Self {
            exchange_rate: ExchangeRateClient::new(http.clone(), &config.exchange_rate)?,
            ip_geolocation: IpGeolocationClient::new(
                http.clone(),
                &config.geolocation.ip_lookup_url,
            )?,
            geocoding: GeocodingClient::new(http.clone(), &config.geolocation.geocoding_base_url)?,
            country_info: CountryInfoClient::new(http, &config.geolocation.country_info_base_url)?,
        })
    }
}
