//! Classified gateway failures.
//!
//! Each variant maps to exactly one HTTP status. The `Display` text of a
//! variant is the `detail` returned to the client.

use thiserror::Error;

/// Errors returned by [`GatewayService`](crate::services::GatewayService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Client input failed structural validation.
    #[error("{0}")]
    InvalidRequest(String),

    /// The backend answered with a non-success status.
    #[error("{detail}")]
    Upstream {
        /// Status returned by the backend, surfaced unchanged.
        status: u16,
        detail: String,
    },

    /// The backend body was not the JSON we expected.
    #[error("Failed to process backend response")]
    InvalidBackendResponse,

    /// No connection to the backend could be established.
    #[error("Could not connect to the inference backend. Verify that the service is running.")]
    BackendUnavailable,

    /// The generate call exceeded its bound.
    #[error("The request exceeded the time limit")]
    Timeout,

    /// The backend reported the model as not found.
    #[error("Model '{model}' not found. Verify that the model is installed.")]
    ModelNotFound { model: String },

    /// Any other protocol-level failure talking to the backend.
    #[error("Error communicating with the backend: {0}")]
    Communication(String),

    /// Model listing failed for any reason.
    #[error("Failed to list models: {0}")]
    ListModels(String),

    /// Uncategorized failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 422,
            Self::Upstream { status, .. } => *status,
            Self::BackendUnavailable => 503,
            Self::Timeout => 504,
            Self::ModelNotFound { .. } => 404,
            Self::InvalidBackendResponse
            | Self::Communication(_)
            | Self::ListModels(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Client-facing detail text.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}
