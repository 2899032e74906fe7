//! API route definitions.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use geoconvert_shared::{AppError, AppResult};
use serde_json::{Value, json};
use tracing::debug;

use crate::AppState;

pub mod conversion;
pub mod currencies;
pub mod geolocation;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(conversion::routes())
        .merge(geolocation::routes())
}

// Helper functions

/// Unwraps a JSON body, turning any extractor rejection into a validation error.
fn json_body(payload: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        debug!(error = %rejection, "Rejected request body");
        AppError::validation("Request body must be valid JSON.")
    })
}

/// Renders `{ "error": <message> }` with the error's status code.
///
/// Only the public message is rendered; upstream causes stay in the logs.
fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err.public_message() }))).into_response()
}
