//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required setting (e.g. an API key) is absent.
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// An upstream provider call failed or answered with something unusable.
    ///
    /// `message` is what the caller sees; `cause` is only ever logged.
    #[error("External service error: {message}")]
    ExternalService {
        /// Caller-facing message.
        message: String,
        /// What actually went wrong upstream.
        #[source]
        cause: UpstreamError,
    },
}

impl AppError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a missing configuration error.
    #[must_use]
    pub fn missing_configuration(msg: impl Into<String>) -> Self {
        Self::MissingConfiguration(msg.into())
    }

    /// Creates an external service error hiding `cause` behind `message`.
    #[must_use]
    pub fn external_service(message: impl Into<String>, cause: UpstreamError) -> Self {
        Self::ExternalService {
            message: message.into(),
            cause,
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::MissingConfiguration(_) | Self::ExternalService { .. } => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MissingConfiguration(_) => "MISSING_CONFIGURATION",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
        }
    }

    /// Returns the human-readable message that is safe to send to callers.
    #[must_use]
    pub fn public_message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::MissingConfiguration(msg) => msg,
            Self::ExternalService { message, .. } => message,
        }
    }

    /// Returns the upstream cause, if any.
    #[must_use]
    pub const fn upstream_cause(&self) -> Option<&UpstreamError> {
        match self {
            Self::ExternalService { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

/// Failure talking to an upstream provider.
///
/// Every variant names the provider so log lines carry it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The request never produced a response (connect, TLS, timeout...).
    #[error("request to {provider} failed: {reason}")]
    Request {
        /// Provider name.
        provider: &'static str,
        /// Transport error description.
        reason: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("{provider} answered with HTTP {status}")]
    Status {
        /// Provider name.
        provider: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("{provider} returned an unreadable body: {reason}")]
    Decode {
        /// Provider name.
        provider: &'static str,
        /// Decoder error description.
        reason: String,
    },

    /// The provider explicitly reported a failure.
    #[error("{provider} rejected the request: {reason}")]
    Rejected {
        /// Provider name.
        provider: &'static str,
        /// Provider-supplied reason (e.g. `unsupported-code`).
        reason: String,
    },

    /// A field the contract promises is absent or empty.
    #[error("{provider} response is missing `{field}`")]
    MissingField {
        /// Provider name.
        provider: &'static str,
        /// Missing field name.
        field: &'static str,
    },

    /// The lookup succeeded but matched nothing.
    #[error("{provider}: {what} not found")]
    NotFound {
        /// Provider name.
        provider: &'static str,
        /// What was looked up.
        what: String,
    },
}

impl UpstreamError {
    /// Returns the provider that produced this error.
    #[must_use]
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::Request { provider, .. }
            | Self::Status { provider, .. }
            | Self::Decode { provider, .. }
            | Self::Rejected { provider, .. }
            | Self::MissingField { provider, .. }
            | Self::NotFound { provider, .. } => provider,
        }
    }
}
