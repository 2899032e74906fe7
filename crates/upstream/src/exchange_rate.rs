//! Exchange-rate provider: pair conversion.
//!
//! `GET {base}/{api_key}/pair/{FROM}/{TO}/{amount}` answers
//! `{ "result": "success", "conversion_result": 42.5, .. }` or
//! `{ "result": "error", "error-type": "unsupported-code" }`.

use std::time::Duration;

use geoconvert_core::currency::{ConversionRequest, decimal_from_number};
use geoconvert_shared::{ExchangeRateConfig, UpstreamError};
use moka::future::Cache;
use reqwest::{Client, Url};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::http::{SetupError, get_json, parse_base_url, with_segments};

/// Provider name used in errors and logs.
pub const PROVIDER: &str = "exchange-rate";

/// Reason used when the provider rejects a pair without saying why.
pub const RATE_UNAVAILABLE: &str = "rate not available for these currencies";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PairKey {
    from: String,
    to: String,
    amount: String,
}

impl From<&ConversionRequest> for PairKey {
    fn from(request: &ConversionRequest) -> Self {
        Self {
            from: request.from_currency().to_string(),
            to: request.to_currency().to_string(),
            amount: request.amount_segment(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PairConversionResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    conversion_result: Option<Value>,
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
}

impl PairConversionResponse {
    /// Accepts only `result == "success"` with a numeric `conversion_result`.
    fn into_converted(self) -> Result<Decimal, UpstreamError> {
        let number = match (self.result.as_deref(), self.conversion_result) {
            (Some("success"), Some(Value::Number(n))) => n,
            _ => {
                return Err(UpstreamError::Rejected {
                    provider: PROVIDER,
                    reason: self
                        .error_type
                        .filter(|reason| !reason.is_empty())
                        .unwrap_or_else(|| RATE_UNAVAILABLE.to_string()),
                });
            }
        };

        decimal_from_number(&number).ok_or_else(|| UpstreamError::Decode {
            provider: PROVIDER,
            reason: format!("conversion_result {number} is out of range"),
        })
    }
}

/// Client for the exchange-rate provider.
#[derive(Clone)]
pub struct ExchangeRateClient {
    http: Client,
    base_url: Url,
    cache: Option<Cache<PairKey, Decimal>>,
}

impl ExchangeRateClient {
    /// Creates a client. A zero `cache_ttl_secs` disables result reuse.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(http: Client, config: &ExchangeRateConfig) -> Result<Self, SetupError> {
        let base_url = parse_base_url(PROVIDER, &config.base_url)?;
        let cache = (config.cache_ttl_secs > 0).then(|| {
            Cache::builder()
                .max_capacity(config.cache_capacity)
                .time_to_live(Duration::from_secs(config.cache_ttl_secs))
                .build()
        });

        Ok(Self {
            http,
            base_url,
            cache,
        })
    }

    /// Converts `request.amount()` from one currency to the other.
    ///
    /// Successful results are reused for the configured TTL; failures are
    /// never cached.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Rejected` carrying the provider's `error-type`
    /// when it refuses the pair, or a transport/status/decode error.
    pub async fn pair_conversion(
        &self,
        api_key: &str,
        request: &ConversionRequest,
    ) -> Result<Decimal, UpstreamError> {
        let key = PairKey::from(request);

        if let Some(cache) = &self.cache
            && let Some(converted) = cache.get(&key).await
        {
            debug!(from = %key.from, to = %key.to, "Pair conversion served from cache");
            return Ok(converted);
        }

        let url = with_segments(
            PROVIDER,
            &self.base_url,
            [api_key, "pair", key.from.as_str(), key.to.as_str(), key.amount.as_str()],
        )?;
        debug!(from = %key.from, to = %key.to, amount = %key.amount, "Requesting pair conversion");

        let response: PairConversionResponse = get_json(PROVIDER, self.http.get(url)).await?;
        let converted = response.into_converted()?;

        if let Some(cache) = &self.cache {
            cache.insert(key, converted).await;
        }

        Ok(converted)
    }
}
