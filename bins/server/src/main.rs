//! GeoConvert API Server
//!
//! Main entry point for the currency conversion and detection service.

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geoconvert_api::{AppState, create_router};
use geoconvert_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "geoconvert=debug,geoconvert_api=debug,geoconvert_upstream=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    if config.exchange_rate.api_key().is_none() {
        warn!("No exchange rate API key configured, conversions will fail");
    }
    info!(
        exchange_rate = %config.exchange_rate.base_url,
        ip_lookup = %config.geolocation.ip_lookup_url,
        geocoding = %config.geolocation.geocoding_base_url,
        country_info = %config.geolocation.country_info_base_url,
        cache_ttl_secs = config.exchange_rate.cache_ttl_secs,
        "Upstream providers configured"
    );

    // Create application state
    let state = AppState::from_config(&config)?;

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
