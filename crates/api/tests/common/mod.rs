//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) and provides request/response helpers plus a token mint
//! so tests can act as arbitrary owners.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use daybook_core::storage::DisabledStorage;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use daybook_api::auth::jwt::{issue_token, JwtConfig};
use daybook_api::config::ServerConfig;
use daybook_api::router::build_app_router;
use daybook_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Arc::new(DisabledStorage),
    };
    build_app_router(state, &config)
}

/// Mint a bearer token for `owner_id` against the test secret.
pub fn bearer(owner_id: i64) -> String {
    format!("Bearer {}", issue_token(owner_id, &test_config().jwt))
}

/// Send a GET request as `owner_id`.
pub async fn get(app: Router, uri: &str, owner_id: i64) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", bearer(owner_id))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with no Authorization header.
pub async fn get_unauthed(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body as `owner_id`.
pub async fn post_json(
    app: Router,
    uri: &str,
    owner_id: i64,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", bearer(owner_id))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body as `owner_id`.
pub async fn put_json(
    app: Router,
    uri: &str,
    owner_id: i64,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("authorization", bearer(owner_id))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with no body as `owner_id`.
pub async fn put(app: Router, uri: &str, owner_id: i64) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("authorization", bearer(owner_id))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request as `owner_id`.
pub async fn delete(app: Router, uri: &str, owner_id: i64) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", bearer(owner_id))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Decode a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
