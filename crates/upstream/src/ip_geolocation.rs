//! IP geolocation provider.
//!
//! The lookup URL answers for whichever address the request comes from and
//! reports, among other things, the local `currency`.

use geoconvert_shared::UpstreamError;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::http::{SetupError, get_json, parse_base_url};

/// Provider name used in errors and logs.
pub const PROVIDER: &str = "ip-geolocation";

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    #[serde(default)]
    currency: Option<Value>,
}

/// Client for the IP geolocation provider.
#[derive(Clone)]
pub struct IpGeolocationClient {
    http: Client,
    lookup_url: Url,
}

impl IpGeolocationClient {
    /// Creates a client for the given lookup URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(http: Client, lookup_url: &str) -> Result<Self, SetupError> {
        Ok(Self {
            http,
            lookup_url: parse_base_url(PROVIDER, lookup_url)?,
        })
    }

    /// Returns the currency code of the requesting network, verbatim.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::MissingField` when the response has no non-empty
    /// string `currency`, or a transport/status/decode error.
    pub async fn lookup_currency(&self) -> Result<String, UpstreamError> {
        debug!(provider = PROVIDER, "Looking up currency by IP");
        let response: IpLookupResponse =
            get_json(PROVIDER, self.http.get(self.lookup_url.clone())).await?;

        match response.currency {
            Some(Value::String(currency)) if !currency.is_empty() => Ok(currency),
            _ => Err(UpstreamError::MissingField {
                provider: PROVIDER,
                field: "currency",
            }),
        }
    }
}
