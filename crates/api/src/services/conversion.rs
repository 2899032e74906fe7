//! Currency conversion pipeline.

use geoconvert_core::currency::{ConversionRequest, ConversionResult};
use geoconvert_shared::{AppError, AppResult};
use geoconvert_upstream::ExchangeRateClient;
use serde_json::Value;
use tracing::{error, info};

/// Message returned when the exchange-rate provider fails in any way.
pub const CONVERSION_FAILED: &str = "Error while computing the conversion.";

/// Message returned when no exchange-rate API key is configured.
pub const MISSING_API_KEY: &str = "Exchange rate API key is not configured (API_KEY).";

/// Converts amounts through the exchange-rate provider.
#[derive(Clone)]
pub struct ConversionService {
    client: ExchangeRateClient,
    api_key: Option<String>,
}

impl ConversionService {
    /// Creates the service. An empty key counts as no key.
    #[must_use]
    pub fn new(client: ExchangeRateClient, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    /// Validates a form body `{ fromCurrency, toCurrency, amount }` and converts it.
    ///
    /// # Errors
    ///
    /// - `AppError::Validation` before any upstream call on bad input
    /// - `AppError::MissingConfiguration` when no API key is configured
    /// - `AppError::ExternalService` when the provider fails or refuses
    pub async fn convert(&self, body: &Value) -> AppResult<ConversionResult> {
        let request = ConversionRequest::from_json(body)?;
        self.convert_request(&request).await
    }

    /// Converts an already validated request.
    ///
    /// # Errors
    ///
    /// See [`ConversionService::convert`].
    pub async fn convert_request(
        &self,
        request: &ConversionRequest,
    ) -> AppResult<ConversionResult> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("Conversion requested but no exchange rate API key is configured");
            return Err(AppError::missing_configuration(MISSING_API_KEY));
        };

        match self.client.pair_conversion(api_key, request).await {
            Ok(converted) => {
                let result = ConversionResult::from_amount(converted);
                info!(
                    from = %request.from_currency(),
                    to = %request.to_currency(),
                    amount = %request.amount(),
                    result = %result.result,
                    "Conversion completed"
                );
                Ok(result)
            }
            Err(cause) => {
                error!(
                    provider = cause.provider(),
                    error = %cause,
                    from = %request.from_currency(),
                    to = %request.to_currency(),
                    "Conversion failed"
                );
                Err(AppError::external_service(CONVERSION_FAILED, cause))
            }
        }
    }
}
