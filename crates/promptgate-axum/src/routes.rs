//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// Create the gateway router.
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(handlers::system::info))
        .route("/health", get(handlers::system::health))
        .route("/models", get(handlers::models::list))
        .route("/ask", post(handlers::ask::ask))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
