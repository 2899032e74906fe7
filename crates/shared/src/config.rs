//! Application configuration management.

use serde::Deserialize;

/// Environment variable consulted when no exchange-rate key is configured.
pub const LEGACY_API_KEY_VAR: &str = "API_KEY";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Exchange-rate provider configuration.
    #[serde(default)]
    pub exchange_rate: ExchangeRateConfig,
    /// Geolocation providers configuration.
    #[serde(default)]
    pub geolocation: GeolocationConfig,
    /// Outbound HTTP client configuration.
    #[serde(default)]
    pub http: HttpConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Exchange-rate provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateConfig {
    /// Provider API key. Conversions fail without it.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL, the key and pair path are appended to it.
    #[serde(default = "default_exchange_rate_base_url")]
    pub base_url: String,
    /// How long a pair conversion result is reused, in seconds. 0 disables.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// Maximum number of cached pair conversions.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

impl Default for ExchangeRateConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_exchange_rate_base_url(),
            cache_ttl_secs: default_cache_ttl(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl ExchangeRateConfig {
    /// Returns the API key when it is set to something non-empty.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

fn default_exchange_rate_base_url() -> String {
    "https://v6.exchangerate-api.com/v6".to_string()
}

fn default_cache_ttl() -> u64 {
    3600 // 1 hour
}

fn default_cache_capacity() -> u64 {
    1000
}

/// Geolocation providers configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeolocationConfig {
    /// IP lookup endpoint, answers for the caller's own address.
    #[serde(default = "default_ip_lookup_url")]
    pub ip_lookup_url: String,
    /// Address search (geocoding) base URL.
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Country info base URL.
    #[serde(default = "default_country_info_base_url")]
    pub country_info_base_url: String,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            ip_lookup_url: default_ip_lookup_url(),
            geocoding_base_url: default_geocoding_base_url(),
            country_info_base_url: default_country_info_base_url(),
        }
    }
}

fn default_ip_lookup_url() -> String {
    "https://ipapi.co/json/".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_country_info_base_url() -> String {
    "https://restcountries.com/v3.1".to_string()
}

/// Outbound HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// `User-Agent` sent upstream. The geocoding provider bans anonymous clients.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_user_agent() -> String {
    "GeoConvertApp/1.0".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// When no exchange-rate key is configured, `API_KEY` is used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("GEOCONVERT").separator("__"))
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;
        if app_config.exchange_rate.api_key().is_none() {
            app_config.exchange_rate.api_key = std::env::var(LEGACY_API_KEY_VAR).ok();
        }

        Ok(app_config)
    }
}
