//! Prompt completion handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use promptgate_core::{AskResponse, PromptRequest};
use tracing::{debug, info, warn};

use crate::error::HttpError;
use crate::state::AppState;

/// `POST /ask` - forward a prompt to the backend.
///
/// The body is parsed here rather than with the `Json` extractor so that
/// every rejection carries the same `{"detail": ...}` shape.
pub async fn ask(State(state): State<AppState>, body: Bytes) -> Result<Json<AskResponse>, HttpError> {
    debug!("POST /ask");

    let request: PromptRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected /ask request: {e}");
        HttpError::UnprocessableEntity(format!("Invalid request body: {e}"))
    })?;

    info!(
        model = %request.effective_model(state.gateway.default_model()),
        explicit_model = request.model.is_some(),
        "Processing prompt request"
    );

    let response = state.gateway.ask(&request).await?;
    Ok(Json(response))
}
