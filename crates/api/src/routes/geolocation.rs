//! Local currency detection routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;

use super::{error_response, json_body};
use crate::AppState;

/// Creates the geolocation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/geolocation", get(detect_by_ip).post(detect_by_address))
}

/// GET `/geolocation` - Detect the caller's currency from its IP.
async fn detect_by_ip(State(state): State<AppState>) -> Response {
    match state.geolocation.detect_by_ip().await {
        Ok(detection) => (StatusCode::OK, Json(detection)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// POST `/geolocation` - Detect the currency of `{ address }`.
async fn detect_by_address(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match json_body(payload) {
        Ok(body) => body,
        Err(e) => return error_response(&e),
    };

    match state.geolocation.detect_by_address(&body).await {
        Ok(detection) => (StatusCode::OK, Json(detection)).into_response(),
        Err(e) => error_response(&e),
    }
}
