#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use datapusher_api::config::ServerConfig;
use datapusher_api::router::build_app_router;
use datapusher_api::state::AppState;
use datapusher_core::tokens::TOKEN_HEADER;
use datapusher_dispatch::{DispatchConfig, DispatchEngine};

/// Build a test `ServerConfig` with safe defaults.
///
/// Deliveries time out after two seconds so a misbehaving mock cannot stall
/// the suite.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        db_max_connections: 5,
        dispatch: DispatchConfig::default().with_timeout(Duration::from_secs(2)),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Same as [`build_test_app`] with a caller-supplied configuration.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let dispatcher = DispatchEngine::new(config.dispatch.clone()).unwrap();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        dispatcher: Arc::new(dispatcher),
    };

    build_app_router(state, &config)
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PUT, uri, body).await
}

/// POST a raw body to the ingress endpoint, optionally with a token header.
pub async fn push(app: Router, uri: &str, token: Option<&str>, body: &str) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(token) = token {
        builder = builder.header(TOKEN_HEADER, token);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create an account through the API and return its `data` object.
pub async fn create_account(pool: &PgPool, email: &str) -> serde_json::Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/accounts",
        serde_json::json!({"email": email, "name": "Producer"}),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"].clone()
}

/// Create a destination through the API and return its `data` object.
pub async fn create_destination(
    pool: &PgPool,
    account_id: i64,
    url: &str,
    http_method: &str,
    headers: serde_json::Value,
) -> serde_json::Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/destinations",
        serde_json::json!({
            "account_id": account_id,
            "url": url,
            "http_method": http_method,
            "headers": headers,
        }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"].clone()
}
