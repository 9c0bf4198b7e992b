//! Service metadata and health handlers.

use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

/// Response body of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

/// `GET /` - what this service is.
pub async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "promptgate",
        description: "HTTP gateway to a local Ollama inference service",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /health` - liveness only; the backend is not contacted.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}
