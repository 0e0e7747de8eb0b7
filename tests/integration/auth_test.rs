//! Authentication API integration tests
//!
//! Tests for the registration, login and current-user endpoints, and for
//! bearer token handling on protected routes.

use axum::http::{header, HeaderValue, StatusCode};
use chrono::Utc;
use jsonwebtoken::Algorithm;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use craneshell::backend::auth::handlers::{TokenResponse, UserResponse};
use craneshell::backend::auth::sessions::TokenService;
use craneshell::backend::auth::users::delete_user;

use crate::common::{auth_header, register_user, TestApp, TEST_SECRET};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@x.com",
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: TokenResponse = response.json();
    assert_eq!(body.token_type, "bearer");
    assert_eq!(body.user.id, 1);
    assert_eq!(body.user.username, "alice");
    assert_eq!(body.user.email, "alice@x.com");
    assert_eq!(body.expires_in, 24 * 3600);
    assert!(!body.access_token.is_empty());

    let raw: Value = response.json();
    assert!(raw["user"].get("password_hash").is_none());
    assert_eq!(app.db.count("users").await, 1);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;
    register_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice2",
            "email": "ALICE@example.com",
            "password": "password123"
        }))
        .await;

    assert_error_response!(response, StatusCode::BAD_REQUEST, "Email already registered");
    assert_eq!(app.db.count("users").await, 1);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;
    register_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "other@example.com",
            "password": "password123"
        }))
        .await;

    assert_error_response!(response, StatusCode::BAD_REQUEST, "Username already taken");
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::spawn().await;

    let cases = [
        json!({"username": "al", "email": "al@x.com", "password": "password123"}),
        json!({"username": "al ice", "email": "alice@x.com", "password": "password123"}),
        json!({"username": "alice", "email": "not-an-email", "password": "password123"}),
        json!({"username": "alice", "email": "alice@x.com", "password": "short"}),
        json!({"username": "alice", "email": "alice@x.com", "password": "a".repeat(72)}),
    ];

    for case in cases {
        let response = app.server.post("/api/auth/register").json(&case).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
    assert_eq!(app.db.count("users").await, 0);
}

#[tokio::test]
async fn test_long_password_prefix_does_not_log_in() {
    let app = TestApp::spawn().await;
    let password = format!("{}correct", "a".repeat(64));

    app.server
        .post("/api/auth/register")
        .json(&json!({"username": "alice", "email": "alice@x.com", "password": password}))
        .await
        .assert_status_ok();

    let guess = format!("{}a{}", "a".repeat(64), "attacker-guess");
    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({"email": "alice@x.com", "password": guess}))
        .await;
    assert_error_response!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": alice.email, "password": alice.password }))
        .await;

    response.assert_status_ok();
    let body: TokenResponse = response.json();
    assert_eq!(body.user.id, alice.id);

    let me = app
        .server
        .get("/api/auth/me")
        .add_header(header::AUTHORIZATION, auth_header(&body.access_token))
        .await;
    me.assert_status_ok();
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;

    let wrong_password = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": alice.email, "password": "wrongpass" }))
        .await;
    let unknown_email = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "password123" }))
        .await;

    assert_error_response!(wrong_password, StatusCode::UNAUTHORIZED, "Invalid credentials");
    assert_error_response!(unknown_email, StatusCode::UNAUTHORIZED, "Invalid credentials");
    assert_eq!(wrong_password.text(), unknown_email.text());
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;
    register_user(&app.server, "bob").await;

    let response = app
        .server
        .get("/api/auth/me")
        .add_header(header::AUTHORIZATION, alice.auth_header())
        .await;

    response.assert_status_ok();
    let user: UserResponse = response.json();
    assert_eq!(user.id, alice.id);
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_me_rejects_bad_credentials() {
    let app = TestApp::spawn().await;

    let missing = app.server.get("/api/auth/me").await;
    assert_error_response!(missing, StatusCode::UNAUTHORIZED, "Not authenticated");

    for value in ["Bearer garbage", "Basic abc", "Bearer"] {
        let response = app
            .server
            .get("/api/auth/me")
            .add_header(header::AUTHORIZATION, HeaderValue::from_static(value))
            .await;
        assert_error_response!(response, StatusCode::UNAUTHORIZED, "Invalid token");
    }
}

#[tokio::test]
async fn test_expired_token() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;

    let tokens = TokenService::new(TEST_SECRET.as_bytes(), Algorithm::HS256, 24);
    let expired = tokens
        .issue_at(alice.id, Utc::now().timestamp() - tokens.ttl_seconds() - 1)
        .unwrap();

    let response = app
        .server
        .get("/api/auth/me")
        .add_header(header::AUTHORIZATION, auth_header(&expired.token))
        .await;
    assert_error_response!(response, StatusCode::UNAUTHORIZED, "Token expired");
}

#[tokio::test]
async fn test_token_from_other_secret() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;

    let forged = TokenService::new(b"someone-else", Algorithm::HS256, 24)
        .issue(alice.id)
        .unwrap();

    let response = app
        .server
        .get("/api/auth/me")
        .add_header(header::AUTHORIZATION, auth_header(&forged.token))
        .await;
    assert_error_response!(response, StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_token_of_deleted_user() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;

    assert!(delete_user(app.db.pool(), alice.id).await.unwrap());

    let response = app
        .server
        .get("/api/auth/me")
        .add_header(header::AUTHORIZATION, alice.auth_header())
        .await;
    assert_error_response!(response, StatusCode::UNAUTHORIZED, "User not found");
}

#[tokio::test]
async fn test_configured_ttl_is_reported() {
    let mut config = crate::common::test_config();
    config.auth.token_ttl_hours = 2;
    let app = TestApp::spawn_with(config).await;

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@x.com",
            "password": "password123"
        }))
        .await;

    let body: TokenResponse = response.json();
    assert_eq!(body.expires_in, 2 * 3600);
}
