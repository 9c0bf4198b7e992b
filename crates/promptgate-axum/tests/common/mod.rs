//! Shared helpers for gateway route tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use promptgate_axum::{AxumContext, create_router};
use promptgate_core::{GatewayConfig, NoopExchangeLog};
use promptgate_ollama::OllamaClient;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Default model used by every test gateway.
pub const TEST_DEFAULT_MODEL: &str = "deepseek-r1:14b";

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A localhost URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Gateway router pointed at `backend_url`.
pub fn gateway(backend_url: &str, generate_timeout: Duration) -> Router {
    let config = GatewayConfig::new()
        .with_backend_url(backend_url)
        .with_default_model(TEST_DEFAULT_MODEL)
        .with_generate_timeout(generate_timeout);
    let backend = Arc::new(OllamaClient::new(backend_url).unwrap());
    create_router(AxumContext::new(config, backend, Arc::new(NoopExchangeLog)))
}

/// Send a request and return status plus parsed JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "expected JSON body, got: {}",
            String::from_utf8_lossy(&body)
        )
    });
    (status, json)
}

pub fn post_ask(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ask")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
