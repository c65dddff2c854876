mod common;

use axum::http::{Method, StatusCode};
use common::{accounts, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_login_success() {
    let app = setup_test_app();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": accounts::TEACHER, "password": "password" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].as_str().is_some());
    assert_eq!(body["user"]["email"], accounts::TEACHER);
    assert_eq!(body["user"]["role"], "TEACHER");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_is_case_insensitive_on_email() {
    let app = setup_test_app();

    let (status, _) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "Admin@EaSwipe.com", "password": "password" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = setup_test_app();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": accounts::ADMIN, "password": "wrongpass" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid email or password");

    let (status, _) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "nobody@easwipe.com", "password": "password" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_invalid_email_format() {
    let app = setup_test_app();

    let (status, _) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "not-an-email", "password": "password" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = setup_test_app();

    let (status, _) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": accounts::ADMIN })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_forgot_password_is_neutral() {
    let app = setup_test_app();

    let (known_status, known) = app
        .send(
            Method::POST,
            "/api/auth/forgot-password",
            None,
            Some(json!({ "email": accounts::TEACHER })),
        )
        .await;
    let (unknown_status, unknown) = app
        .send(
            Method::POST,
            "/api/auth/forgot-password",
            None,
            Some(json!({ "email": "ghost@easwipe.com" })),
        )
        .await;

    assert_eq!(known_status, StatusCode::OK);
    assert_eq!(unknown_status, StatusCode::OK);
    assert_eq!(known, unknown);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = setup_test_app();

    let (status, _) = app.send(Method::GET, "/api/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/users", "not-a-jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_token_reaches_protected_route() {
    let app = setup_test_app();
    let token = app.login(accounts::PARENT).await;

    let (status, body) = app.get("/api/users/profile", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "u_parent");
    assert_eq!(body["permissions"], json!(["view_self_id"]));
}

#[tokio::test]
async fn test_health_and_disabled_metrics() {
    let app = setup_test_app();

    let (status, body) = app.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    let (status, _) = app.send(Method::GET, "/metrics", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
