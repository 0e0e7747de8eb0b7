//! Public gallery integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use craneshell::backend::configs::ConfigPublicResponse;

use crate::common::{register_user, TestApp};

/// Register two users and give them a few configs
async fn seeded() -> TestApp {
    let app = TestApp::spawn().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;

    for (user, name) in [
        (&alice, "Solarized Dark"),
        (&bob, "Gruvbox"),
        (&alice, "solarized light"),
        (&bob, "100% Contrast"),
    ] {
        app.server
            .post("/api/configs")
            .add_header(axum::http::header::AUTHORIZATION, user.auth_header())
            .json(&json!({ "name": name }))
            .await
            .assert_status(StatusCode::CREATED);
    }
    app
}

fn names(configs: &[ConfigPublicResponse]) -> Vec<&str> {
    configs.iter().map(|c| c.name.as_str()).collect()
}

#[tokio::test]
async fn test_popular_lists_newest_first() {
    let app = seeded().await;

    let response = app.server.get("/api/public/popular").await;
    response.assert_status_ok();
    let configs: Vec<ConfigPublicResponse> = response.json();
    assert_eq!(
        names(&configs),
        vec!["100% Contrast", "solarized light", "Gruvbox", "Solarized Dark"]
    );

    let limited: Vec<ConfigPublicResponse> = app
        .server
        .get("/api/public/popular")
        .add_query_param("limit", 2)
        .await
        .json();
    assert_eq!(limited.len(), 2);
}

#[tokio::test]
async fn test_public_view_hides_owner() {
    let app = seeded().await;

    let body: Value = app.server.get("/api/public/popular").await.json();
    let first = &body[0];
    assert!(first.get("user_id").is_none());
    assert!(first.get("color8").is_none());
    assert_eq!(first["color0"], "#000000");
    assert_eq!(first["opacity"], 0.9);
}

#[tokio::test]
async fn test_limit_out_of_range() {
    let app = seeded().await;

    for limit in [0, 101] {
        let response = app
            .server
            .get("/api/public/popular")
            .add_query_param("limit", limit)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_search() {
    let app = seeded().await;

    let configs: Vec<ConfigPublicResponse> = app
        .server
        .get("/api/public/search")
        .add_query_param("q", "SOLAR")
        .await
        .json();
    assert_eq!(names(&configs), vec!["solarized light", "Solarized Dark"]);

    let configs: Vec<ConfigPublicResponse> = app
        .server
        .get("/api/public/search")
        .add_query_param("q", "%")
        .await
        .json();
    assert_eq!(names(&configs), vec!["100% Contrast"]);

    let configs: Vec<ConfigPublicResponse> = app
        .server
        .get("/api/public/search")
        .add_query_param("q", "solar")
        .add_query_param("limit", 1)
        .await
        .json();
    assert_eq!(configs.len(), 1);
}

#[tokio::test]
async fn test_search_requires_query() {
    let app = seeded().await;

    let response = app.server.get("/api/public/search").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = app
        .server
        .get("/api/public/search")
        .add_query_param("q", "")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_public_config() {
    let app = seeded().await;

    let response = app.server.get("/api/public/configs/2").await;
    response.assert_status_ok();
    let config: ConfigPublicResponse = response.json();
    assert_eq!(config.name, "Gruvbox");

    let missing = app.server.get("/api/public/configs/99").await;
    assert_error_response!(missing, StatusCode::NOT_FOUND, "Config not found");
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let app = TestApp::spawn().await;

    let health: Value = app.server.get("/api/health").await.json();
    assert_eq!(health["status"], "ok");

    let response = app.server.get("/api/unknown").await;
    assert_error_response!(response, StatusCode::NOT_FOUND, "Not found");
}
