//! Integration tests for the cart endpoints.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use serde_json::Value;
use sunglasses_integration_tests::{auth_request, body_json, fixture_app, login};
use tower::ServiceExt;

/// Collect the `id` of every product in a JSON array response.
fn product_ids(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|product| product["id"].as_str().unwrap())
        .collect()
}

// ============================================================================
// Auth Gate
// ============================================================================

#[tokio::test]
async fn test_cart_read_requires_login() {
    let app = fixture_app();

    let response = app
        .oneshot(auth_request("GET", "/api/me/cart", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Login required to view cart");
}

#[tokio::test]
async fn test_cart_add_requires_login() {
    let app = fixture_app();

    let response = app
        .oneshot(auth_request("POST", "/api/me/cart/1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Login required to add items to cart");
}

#[tokio::test]
async fn test_cart_remove_requires_login() {
    let app = fixture_app();

    let response = app
        .oneshot(auth_request("DELETE", "/api/me/cart/1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Login required to delete items from cart");
}

#[tokio::test]
async fn test_unknown_token_is_rejected() {
    let app = fixture_app();

    let response = app
        .oneshot(auth_request(
            "GET",
            "/api/me/cart",
            Some("0000000000000000"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_is_checked_before_the_product_id() {
    let app = fixture_app();

    // Bogus product id without a token still answers 401, not 404
    let response = app
        .oneshot(auth_request("POST", "/api/me/cart/0", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Add / Read / Remove Flow
// ============================================================================

#[tokio::test]
async fn test_add_read_delete_flow() {
    let app = fixture_app();
    let token = login(&app, "yellowleopard753", "jonjon").await;

    // Add product 1
    let response = app
        .clone()
        .oneshot(auth_request("POST", "/api/me/cart/1", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Item 1 added to cart");

    // The cart now shows it
    let response = app
        .clone()
        .oneshot(auth_request("GET", "/api/me/cart", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(product_ids(&body), ["1"]);
    assert_eq!(body[0]["name"], "Superglasses");

    // Delete it
    let response = app
        .clone()
        .oneshot(auth_request("DELETE", "/api/me/cart/1", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Item with product id 1 deleted from cart");

    // A second delete misses
    let response = app
        .clone()
        .oneshot(auth_request("DELETE", "/api/me/cart/1", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Product not found in cart");

    // And the cart is empty again
    let response = app
        .oneshot(auth_request("GET", "/api/me/cart", Some(&token)))
        .await
        .unwrap();
    let body = body_json(response.into_body()).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let app = fixture_app();
    let token = login(&app, "yellowleopard753", "jonjon").await;

    let response = app
        .oneshot(auth_request("POST", "/api/me/cart/0", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Invalid product id");
}

#[tokio::test]
async fn test_remove_unknown_product_is_not_found() {
    let app = fixture_app();
    let token = login(&app, "yellowleopard753", "jonjon").await;

    // An id outside the catalog reports an invalid id, not a cart miss
    let response = app
        .oneshot(auth_request("DELETE", "/api/me/cart/0", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Invalid product id");
}

#[tokio::test]
async fn test_duplicate_adds_append_entries() {
    let app = fixture_app();
    let token = login(&app, "yellowleopard753", "jonjon").await;

    for uri in ["/api/me/cart/1", "/api/me/cart/2", "/api/me/cart/1"] {
        let response = app
            .clone()
            .oneshot(auth_request("POST", uri, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(auth_request("GET", "/api/me/cart", Some(&token)))
        .await
        .unwrap();
    let body = body_json(response.into_body()).await;
    assert_eq!(product_ids(&body), ["1", "2", "1"]);

    // Removing deletes the first occurrence only, keeping order
    let response = app
        .clone()
        .oneshot(auth_request("DELETE", "/api/me/cart/1", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(auth_request("GET", "/api/me/cart", Some(&token)))
        .await
        .unwrap();
    let body = body_json(response.into_body()).await;
    assert_eq!(product_ids(&body), ["2", "1"]);
}

#[tokio::test]
async fn test_carts_are_per_user() {
    let app = fixture_app();
    let susanna = login(&app, "yellowleopard753", "jonjon").await;
    let salvador = login(&app, "lazywolf342", "tucker").await;

    let response = app
        .clone()
        .oneshot(auth_request("POST", "/api/me/cart/3", Some(&susanna)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Susanna's cart has the product, Salvador's stays empty
    let response = app
        .clone()
        .oneshot(auth_request("GET", "/api/me/cart", Some(&susanna)))
        .await
        .unwrap();
    let body = body_json(response.into_body()).await;
    assert_eq!(product_ids(&body), ["3"]);

    let response = app
        .oneshot(auth_request("GET", "/api/me/cart", Some(&salvador)))
        .await
        .unwrap();
    let body = body_json(response.into_body()).await;
    assert!(body.as_array().unwrap().is_empty());
}
