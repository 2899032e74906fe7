//! Shared HTTP plumbing: client construction, URL building, JSON fetching.

use std::time::Duration;

use geoconvert_shared::{HttpConfig, UpstreamError};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Errors raised while wiring the clients at startup.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Http(String),

    /// A configured provider URL is unusable.
    #[error("invalid {provider} URL `{url}`")]
    InvalidUrl {
        /// Provider name.
        provider: &'static str,
        /// Offending URL.
        url: String,
    },
}

/// Builds the HTTP client shared by every provider.
///
/// The configured `User-Agent` goes out with every request.
///
/// # Errors
///
/// Returns `SetupError::Http` if the TLS backend cannot be initialized.
pub fn build_http_client(config: &HttpConfig) -> Result<Client, SetupError> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| SetupError::Http(e.to_string()))
}

/// Parses a provider base URL that path segments can be appended to.
pub(crate) fn parse_base_url(provider: &'static str, raw: &str) -> Result<Url, SetupError> {
    let invalid = || SetupError::InvalidUrl {
        provider,
        url: raw.to_string(),
    };

    let url = Url::parse(raw).map_err(|_| invalid())?;
    if url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(url)
}

/// Appends percent-encoded path segments to `base`.
pub(crate) fn with_segments<I, S>(
    provider: &'static str,
    base: &Url,
    segments: I,
) -> Result<Url, UpstreamError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| UpstreamError::Request {
            provider,
            reason: "base URL cannot take path segments".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sends `request` and decodes a JSON body from a 2xx response.
///
/// Error reasons never include the request URL, which may carry credentials.
pub(crate) async fn get_json<T>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, UpstreamError>
where
    T: DeserializeOwned,
{
    let response = request.send().await.map_err(|e| UpstreamError::Request {
        provider,
        reason: e.without_url().to_string(),
    })?;

    let status = response.status();
    debug!(provider, status = status.as_u16(), "Upstream responded");
    if !status.is_success() {
        return Err(UpstreamError::Status {
            provider,
            status: status.as_u16(),
        });
    }

    response.json::<T>().await.map_err(|e| UpstreamError::Decode {
        provider,
        reason: e.without_url().to_string(),
    })
}
