//! Config API integration tests
//!
//! Tests for owner-only CRUD under `/api/configs`.

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use craneshell::backend::configs::ConfigResponse;

use crate::common::{register_user, TestApp, TestUser};

async fn create(app: &TestApp, user: &TestUser, body: Value) -> ConfigResponse {
    let response = app
        .server
        .post("/api/configs")
        .add_header(header::AUTHORIZATION, user.auth_header())
        .json(&body)
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_create_fills_defaults() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;

    let config = create(
        &app,
        &alice,
        json!({ "name": "Dracula", "color1": "#ff5555", "opacity": 0.95 }),
    )
    .await;

    assert_eq!(config.user_id, alice.id);
    assert_eq!(config.name, "Dracula");
    assert_eq!(config.palette.color1, "#ff5555");
    assert_eq!(config.palette.color0, "#000000");
    assert_eq!(config.palette.color15, "#ffffff");
    assert_eq!(config.special.opacity, 0.95);
    assert_eq!(config.special.foreground, "#d3d7cf");
    assert_eq!(config.created_at, config.updated_at);
}

#[tokio::test]
async fn test_create_requires_auth() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/configs")
        .json(&json!({ "name": "Nope" }))
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "Not authenticated");
    assert_eq!(app.db.count("configs").await, 0);
}

#[tokio::test]
async fn test_create_rejects_invalid_colors() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;

    for body in [
        json!({ "name": "Bad", "color0": "black" }),
        json!({ "name": "Bad", "opacity": 1.5 }),
        json!({ "name": "" }),
    ] {
        let response = app
            .server
            .post("/api/configs")
            .add_header(header::AUTHORIZATION, alice.auth_header())
            .json(&body)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_duplicate_name_is_conflict() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;

    create(&app, &alice, json!({ "name": "Nord" })).await;
    // Names are only unique per owner
    create(&app, &bob, json!({ "name": "Nord" })).await;

    let response = app
        .server
        .post("/api/configs")
        .add_header(header::AUTHORIZATION, alice.auth_header())
        .json(&json!({ "name": "Nord" }))
        .await;
    assert_error_response!(response, StatusCode::CONFLICT, "Config name already exists");
}

#[tokio::test]
async fn test_list_own_configs_newest_first() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;

    create(&app, &alice, json!({ "name": "First" })).await;
    create(&app, &bob, json!({ "name": "Bob's" })).await;
    create(&app, &alice, json!({ "name": "Second" })).await;

    let response = app
        .server
        .get("/api/configs")
        .add_header(header::AUTHORIZATION, alice.auth_header())
        .await;

    response.assert_status_ok();
    let configs: Vec<ConfigResponse> = response.json();
    let names: Vec<&str> = configs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[tokio::test]
async fn test_other_users_config_is_not_found() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;

    let config = create(&app, &alice, json!({ "name": "Private" })).await;
    let path = format!("/api/configs/{}", config.id);

    let foreign = app
        .server
        .get(&path)
        .add_header(header::AUTHORIZATION, bob.auth_header())
        .await;
    let missing = app
        .server
        .get("/api/configs/9999")
        .add_header(header::AUTHORIZATION, bob.auth_header())
        .await;

    assert_error_response!(foreign, StatusCode::NOT_FOUND, "Config not found");
    assert_error_response!(missing, StatusCode::NOT_FOUND, "Config not found");
    assert_eq!(foreign.text(), missing.text());

    let update = app
        .server
        .put(&path)
        .add_header(header::AUTHORIZATION, bob.auth_header())
        .json(&json!({ "name": "Stolen" }))
        .await;
    assert_error_response!(update, StatusCode::NOT_FOUND, "Config not found");

    let delete = app
        .server
        .delete(&path)
        .add_header(header::AUTHORIZATION, bob.auth_header())
        .await;
    assert_error_response!(delete, StatusCode::NOT_FOUND, "Config not found");

    let own = app
        .server
        .get(&path)
        .add_header(header::AUTHORIZATION, alice.auth_header())
        .await;
    own.assert_status_ok();
    let own: ConfigResponse = own.json();
    assert_eq!(own.name, "Private");
}

#[tokio::test]
async fn test_update_replaces_config() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;

    let config = create(&app, &alice, json!({ "name": "Old", "color2": "#123456" })).await;

    let response = app
        .server
        .put(&format!("/api/configs/{}", config.id))
        .add_header(header::AUTHORIZATION, alice.auth_header())
        .json(&json!({ "name": "New", "background": "#101010" }))
        .await;

    response.assert_status_ok();
    let updated: ConfigResponse = response.json();
    assert_eq!(updated.id, config.id);
    assert_eq!(updated.name, "New");
    assert_eq!(updated.special.background, "#101010");
    // Omitted fields go back to their defaults
    assert_eq!(updated.palette.color2, "#4e9a06");
    assert_eq!(updated.created_at, config.created_at);
    assert!(updated.updated_at >= config.updated_at);
}

#[tokio::test]
async fn test_delete_config() {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;

    let config = create(&app, &alice, json!({ "name": "Gone" })).await;
    let path = format!("/api/configs/{}", config.id);

    let response = app
        .server
        .delete(&path)
        .add_header(header::AUTHORIZATION, alice.auth_header())
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Config deleted" }));

    let again = app
        .server
        .delete(&path)
        .add_header(header::AUTHORIZATION, alice.auth_header())
        .await;
    assert_error_response!(again, StatusCode::NOT_FOUND, "Config not found");
    assert_eq!(app.db.count("configs").await, 0);
}
