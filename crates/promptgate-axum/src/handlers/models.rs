//! Model listing handler.

use axum::Json;
use axum::extract::State;
use promptgate_core::ModelInfo;
use tracing::debug;

use crate::error::HttpError;
use crate::state::AppState;

/// `GET /models` - models installed on the backend, in backend order.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ModelInfo>>, HttpError> {
    debug!("GET /models");
    let models = state.gateway.list_models().await?;
    Ok(Json(models))
}
