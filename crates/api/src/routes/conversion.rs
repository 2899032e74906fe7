//! Currency conversion route.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::Value;

use super::{error_response, json_body};
use crate::AppState;

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/conversion", post(convert))
}

/// POST `/conversion` - Convert `{ fromCurrency, toCurrency, amount }`.
///
/// `200 { result }`, `400 { error }` on invalid input, `500 { error }` on
/// missing configuration or provider failure.
async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match json_body(payload) {
        Ok(body) => body,
        Err(e) => return error_response(&e),
    };

    match state.conversion.convert(&body).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => error_response(&e),
    }
}
