//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use notes_db::{DbBackend, DbConfig, DbPool};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::ConnectOptions;
use tower::ServiceExt;

use notes_api::config::ServerConfig;
use notes_api::router::build_app_router;
use notes_api::state::AppState;

/// Open the runtime-selected pool on the migrated database that
/// `#[sqlx::test]` prepared for this test.
pub async fn connect(options: SqliteConnectOptions) -> DbPool {
    let config = DbConfig {
        backend: DbBackend::Sqlite,
        url: options.to_url_lossy().to_string(),
        max_connections: 4,
    };
    notes_db::create_pool(&config).await.unwrap()
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// the `/api` prefix and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        api_prefix: "/api".to_string(),
        environment: "test".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and config.
pub fn build_test_app_with_config(pool: DbPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the full application router with the default test config.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Send a request without a body.
pub async fn send(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request with a raw JSON body.
pub async fn send_json(app: Router, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, &body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, &body.to_string()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
