//! Shared errors and configuration for GeoConvert.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error taxonomy
//! - Upstream provider failure descriptions
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, ExchangeRateConfig, GeolocationConfig, HttpConfig, ServerConfig};
pub use error::{AppError, AppResult, UpstreamError};
