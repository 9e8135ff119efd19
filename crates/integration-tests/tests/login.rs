//! Integration tests for the login endpoint.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use sunglasses_integration_tests::{auth_request, body_json, fixture_app, json_request, login};
use tower::ServiceExt;

#[tokio::test]
async fn test_login_returns_profile_and_token() {
    let app = fixture_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            &json!({ "username": "yellowleopard753", "password": "jonjon" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["email"], "susanna.richards@example.com");
    assert_eq!(body["name"]["title"], "mrs");
    assert_eq!(body["name"]["first"], "susanna");
    assert_eq!(body["name"]["last"], "richards");
    assert!(body["lastUpdated"].as_str().is_some());

    let token = body["token"].as_str().unwrap();
    assert_eq!(token.len(), 16);
    assert!(token.chars().all(char::is_alphanumeric));
}

#[tokio::test]
async fn test_login_twice_issues_distinct_tokens() {
    let app = fixture_app();

    let first = login(&app, "yellowleopard753", "jonjon").await;
    let second = login(&app, "yellowleopard753", "jonjon").await;

    assert_ne!(first, second);

    // Both sessions stay usable
    for token in [&first, &second] {
        let response = app
            .clone()
            .oneshot(auth_request("GET", "/api/me/cart", Some(token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_login_missing_password_is_rejected() {
    let app = fixture_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            &json!({ "username": "yellowleopard753" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Incomplete login information provided");
}

#[tokio::test]
async fn test_login_empty_field_counts_as_missing() {
    let app = fixture_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            &json!({ "username": "", "password": "jonjon" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Incomplete login information provided");
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let app = fixture_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            &json!({ "username": "yellowleopard753", "password": "wrong" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Invalid login credentials");
}

#[tokio::test]
async fn test_login_unknown_user_is_unauthorized() {
    let app = fixture_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            &json!({ "username": "nobody", "password": "nothing" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_rejects_non_json_body() {
    let app = fixture_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/login")
        .header("content-type", "text/plain")
        .body(Body::from("not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
