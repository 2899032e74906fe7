//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for conversion and currency detection
//! - The request pipelines (services) behind them
//! - Error to response mapping

pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use geoconvert_shared::AppConfig;
use geoconvert_upstream::{SetupError, UpstreamClients};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::{ConversionService, GeolocationService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Currency conversion pipeline.
    pub conversion: Arc<ConversionService>,
    /// Currency detection pipelines.
    pub geolocation: Arc<GeolocationService>,
}

impl AppState {
    /// Wires the services from configuration.
    ///
    /// The exchange-rate key is injected here; a missing key only fails
    /// conversion requests, not startup.
    ///
    /// # Errors
    ///
    /// Returns an error if an upstream client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SetupError> {
        let clients = UpstreamClients::from_config(config)?;

        Ok(Self {
            conversion: Arc::new(ConversionService::new(
                clients.exchange_rate,
                config.exchange_rate.api_key().map(str::to_string),
            )),
            geolocation: Arc::new(GeolocationService::new(
                clients.ip_geolocation,
                clients.geocoding,
                clients.country_info,
            )),
        })
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
