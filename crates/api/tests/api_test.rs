//! End-to-end tests of the HTTP surface against mocked providers.
//!
//! Every provider URL points at one `httpmock` server, so no test touches the
//! network.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use geoconvert_api::{AppState, create_router};
use geoconvert_shared::AppConfig;
use http_body_util::BodyExt;
use httpmock::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Configuration pointing every provider at `server`.
fn config_for(server: &MockServer, api_key: Option<&str>) -> AppConfig {
    let mut config = AppConfig::default();
    config.exchange_rate.api_key = api_key.map(str::to_string);
    config.exchange_rate.base_url = server.url("/v6");
    config.exchange_rate.cache_ttl_secs = 0;
    config.geolocation.ip_lookup_url = server.url("/json/");
    config.geolocation.geocoding_base_url = server.url("/nominatim");
    config.geolocation.country_info_base_url = server.url("/v3.1");
    config
}

fn app(server: &MockServer, api_key: Option<&str>) -> Router {
    let state = AppState::from_config(&config_for(server, api_key)).expect("state should build");
    create_router(state)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start();

    let (status, body) = send(app(&server, None), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_currencies_catalogue() {
    let server = MockServer::start();

    let (status, body) = send(app(&server, None), get("/api/currencies")).await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = body["currencies"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["code"].as_str())
        .collect();
    assert_eq!(codes, ["EUR", "USD", "XOF", "GBP", "JPY", "CHF", "AUD"]);
}

#[tokio::test]
async fn test_conversion_success() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v6/secret/pair/EUR/USD/100");
        then.status(200).json_body(json!({
            "result": "success",
            "base_code": "EUR",
            "target_code": "USD",
            "conversion_rate": 0.425,
            "conversion_result": 42.5
        }));
    });

    let (status, body) = send(
        app(&server, Some("secret")),
        post_json(
            "/api/conversion",
            &json!({ "fromCurrency": "eur", "toCurrency": "usd", "amount": "100" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": "42.50" }));
    mock.assert();
}

#[tokio::test]
async fn test_conversion_invalid_amount() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let (status, body) = send(
        app(&server, Some("secret")),
        post_json(
            "/api/conversion",
            &json!({ "fromCurrency": "EUR", "toCurrency": "USD", "amount": -1 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Amount must be greater than zero." }));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_conversion_amount_out_of_range() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let (status, body) = send(
        app(&server, Some("secret")),
        post_json(
            "/api/conversion",
            &json!({ "fromCurrency": "EUR", "toCurrency": "USD", "amount": 1e30 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Amount is out of range." }));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_conversion_malformed_body() {
    let server = MockServer::start();
    let request = Request::builder()
        .method("POST")
        .uri("/api/conversion")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(app(&server, Some("secret")), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Request body must be valid JSON." }));
}

#[tokio::test]
async fn test_conversion_without_api_key() {
    let server = MockServer::start();

    let (status, body) = send(
        app(&server, None),
        post_json(
            "/api/conversion",
            &json!({ "fromCurrency": "EUR", "toCurrency": "USD", "amount": 10 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("API key"));
}

#[tokio::test]
async fn test_conversion_upstream_error_is_generic() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v6/secret/pair/EUR/ABC/10");
        then.status(200)
            .json_body(json!({ "result": "error", "error-type": "unsupported-code" }));
    });

    let (status, body) = send(
        app(&server, Some("secret")),
        post_json(
            "/api/conversion",
            &json!({ "fromCurrency": "EUR", "toCurrency": "ABC", "amount": 10 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error while computing the conversion." }));
}

#[tokio::test]
async fn test_geolocation_by_ip() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/json/");
        then.status(200)
            .json_body(json!({ "ip": "198.51.100.4", "currency": "EUR" }));
    });

    let (status, body) = send(app(&server, None), get("/api/geolocation")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "currency": "EUR" }));
}

#[tokio::test]
async fn test_geolocation_by_ip_without_currency() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/json/");
        then.status(200).json_body(json!({ "ip": "198.51.100.4" }));
    });

    let (status, body) = send(app(&server, None), get("/api/geolocation")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error during IP-based geolocation." }));
}

#[tokio::test]
async fn test_geolocation_by_address() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/nominatim/search")
            .query_param("q", "Bahnhofstrasse 1, Zurich")
            .header("user-agent", "GeoConvertApp/1.0");
        then.status(200)
            .json_body(json!([{ "address": { "country_code": "ch" } }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/v3.1/alpha/CH");
        then.status(200)
            .json_body(json!([{ "currencies": { "CHF": { "name": "Swiss franc", "symbol": "Fr." } } }]));
    });

    let (status, body) = send(
        app(&server, None),
        post_json("/api/geolocation", &json!({ "address": "Bahnhofstrasse 1, Zurich" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "currency": "CHF" }));
}

#[tokio::test]
async fn test_geolocation_by_empty_address() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!([]));
    });

    let (status, body) = send(
        app(&server, None),
        post_json("/api/geolocation", &json!({ "address": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Address is missing." }));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_geolocation_by_unknown_address() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/nominatim/search");
        then.status(200).json_body(json!([]));
    });

    let (status, body) = send(
        app(&server, None),
        post_json("/api/geolocation", &json!({ "address": "Nowhere Land" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error during address-based geolocation." }));
}
