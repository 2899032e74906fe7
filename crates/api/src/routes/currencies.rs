//! Currency catalogue route.

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use geoconvert_core::currency::SUPPORTED_CURRENCIES;
use serde_json::json;

use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// GET `/currencies` - Currencies the conversion form offers.
async fn list_currencies() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "currencies": SUPPORTED_CURRENCIES })),
    )
}
