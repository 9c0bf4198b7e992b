//! Integration tests for `OllamaClient` against a fake backend.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{any, get, post};
use axum::{Json, Router};
use promptgate_core::domain::GenerateRequest;
use promptgate_core::ports::{BackendError, InferenceBackendPort};
use promptgate_ollama::OllamaClient;
use serde_json::{Value, json};

use common::{spawn_backend, unreachable_url};

#[tokio::test]
async fn fetch_tags_returns_raw_reply() {
    let router = Router::new().route(
        "/api/tags",
        get(|| async {
            Json(json!({"models": [
                {"name": "llama3.2:3b", "size": 42, "digest": "abc", "modified_at": "2025-01-01T00:00:00Z"}
            ]}))
        }),
    );
    let base = spawn_backend(router).await;
    let client = OllamaClient::new(&base).unwrap();

    let reply = client.fetch_tags().await.unwrap();

    assert_eq!(reply.status, 200);
    assert!(reply.body.contains("llama3.2:3b"));
    assert!(
        reply
            .headers
            .iter()
            .any(|(name, value)| name == "content-type" && value.contains("application/json"))
    );
}

#[tokio::test]
async fn generate_posts_non_streaming_payload() {
    let router = Router::new().route(
        "/api/generate",
        post(|Json(body): Json<Value>| async move {
            Json(json!({"response": "ok", "echo": body}))
        }),
    );
    let base = spawn_backend(router).await;
    let client = OllamaClient::new(&base).unwrap();

    let request = GenerateRequest::non_streaming("qwen2.5:7b", "hello");
    let reply = client
        .generate(&request, Duration::from_secs(5))
        .await
        .unwrap();

    assert_eq!(reply.status, 200);
    let parsed: Value = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(
        parsed["echo"],
        json!({"model": "qwen2.5:7b", "prompt": "hello", "stream": false})
    );
}

#[tokio::test]
async fn error_status_is_a_reply_not_a_transport_error() {
    let router = Router::new().route(
        "/api/generate",
        post(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "model 'ghost-model' not found"})),
            )
        }),
    );
    let base = spawn_backend(router).await;
    let client = OllamaClient::new(&base).unwrap();

    let reply = client
        .generate(
            &GenerateRequest::non_streaming("ghost-model", "hi"),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert_eq!(reply.status, 404);
    assert!(reply.body.contains("ghost-model"));
}

#[tokio::test]
async fn unreachable_backend_is_connect_error() {
    let client = OllamaClient::new(&unreachable_url().await).unwrap();

    let err = client
        .generate(
            &GenerateRequest::non_streaming("m", "hi"),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Connect(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_backend_is_timeout_error() {
    let router = Router::new().route(
        "/api/generate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"response": "too late"}))
        }),
    );
    let base = spawn_backend(router).await;
    let client = OllamaClient::new(&base).unwrap();

    let err = client
        .generate(
            &GenerateRequest::non_streaming("m", "hi"),
            Duration::from_millis(200),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn redirect_loop_is_protocol_error_without_status() {
    let router = Router::new().route(
        "/api/generate",
        any(|| async { Redirect::to("/api/generate") }),
    );
    let base = spawn_backend(router).await;
    let client = OllamaClient::new(&base).unwrap();

    let err = client
        .generate(
            &GenerateRequest::non_streaming("m", "hi"),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();

    match err {
        BackendError::Protocol { status, message } => {
            assert_eq!(status, None);
            assert!(message.contains("redirect"), "message: {message}");
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
}
