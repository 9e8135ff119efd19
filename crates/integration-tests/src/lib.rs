//! Shared fixtures for the sunglasses API integration tests.
//!
//! Tests drive the real router in-process through
//! `tower::ServiceExt::oneshot` - no network, no external processes.
//! Each test builds an isolated [`AppState`] over the fixture dataset,
//! so carts and sessions never leak between tests.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sunglasses-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use sunglasses_api::config::ApiConfig;
use sunglasses_api::middleware::AUTH_HEADER;
use sunglasses_api::store::Dataset;
use sunglasses_api::{AppState, app};

/// The fixture dataset: two accounts, five brands, six products.
///
/// Mirrors the shape of the seed files in `data/`. Burberry (brand 5)
/// deliberately has no products.
#[must_use]
pub fn fixture_dataset() -> Dataset {
    let users = json!([
        {
            "name": { "title": "mrs", "first": "susanna", "last": "richards" },
            "email": "susanna.richards@example.com",
            "login": { "username": "yellowleopard753", "password": "jonjon" },
            "cart": []
        },
        {
            "name": { "title": "mr", "first": "salvador", "last": "jordan" },
            "email": "salvador.jordan@example.com",
            "login": { "username": "lazywolf342", "password": "tucker" },
            "cart": []
        }
    ]);

    let brands = json!([
        { "id": "1", "name": "Oakley" },
        { "id": "2", "name": "Ray Ban" },
        { "id": "3", "name": "Levi's" },
        { "id": "4", "name": "DKNY" },
        { "id": "5", "name": "Burberry" }
    ]);

    let products = json!([
        {
            "id": "1", "categoryId": "1", "name": "Superglasses",
            "description": "The best glasses in the world",
            "price": 150, "imageUrls": []
        },
        {
            "id": "2", "categoryId": "1", "name": "Black Sunglasses",
            "description": "The best glasses in the world",
            "price": 100, "imageUrls": []
        },
        {
            "id": "3", "categoryId": "1", "name": "Brown Sunglasses",
            "description": "The best glasses in the world",
            "price": 50, "imageUrls": []
        },
        {
            "id": "4", "categoryId": "2", "name": "Better glasses",
            "description": "The best glasses in the world",
            "price": 1500, "imageUrls": []
        },
        {
            "id": "5", "categoryId": "2", "name": "Glasses",
            "description": "The most normal glasses in the world",
            "price": 150, "imageUrls": []
        },
        {
            "id": "6", "categoryId": "2", "name": "glas",
            "description": "Pretty awful glasses",
            "price": 10, "imageUrls": []
        }
    ]);

    Dataset {
        users: serde_json::from_value(users).expect("Fixture users are well-formed"),
        brands: serde_json::from_value(brands).expect("Fixture brands are well-formed"),
        products: serde_json::from_value(products).expect("Fixture products are well-formed"),
    }
}

/// Build an isolated application state over the fixture dataset.
#[must_use]
pub fn fixture_state() -> AppState {
    let config = ApiConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        data_dir: PathBuf::from("data"),
    };

    AppState::new(config, fixture_dataset())
}

/// Build the full router over a fresh fixture state.
#[must_use]
pub fn fixture_app() -> Router {
    app(fixture_state())
}

/// Collect a response body into JSON.
///
/// # Panics
///
/// Panics if the body cannot be read or is not valid JSON.
pub async fn body_json(body: Body) -> Value {
    let bytes = body
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}

/// Build a JSON request.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Build a bodyless request, optionally carrying a login token.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
pub fn auth_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTH_HEADER, token);
    }

    builder
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Log in through the router and return the issued token.
///
/// # Panics
///
/// Panics if the login does not succeed.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let request = json_request(
        "POST",
        "/api/login",
        &json!({ "username": username, "password": password }),
    );

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Login request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    body.get("token")
        .and_then(Value::as_str)
        .expect("Login response carries a token")
        .to_owned()
}
