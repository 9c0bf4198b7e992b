//! Axum-specific error types and mappings.
//!
//! Maps `GatewayError` to HTTP status codes and `{"detail": ...}` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use promptgate_core::GatewayError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request body failed validation.
    #[error("{0}")]
    UnprocessableEntity(String),

    /// Model not found on the backend.
    #[error("{0}")]
    NotFound(String),

    /// Backend unreachable.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Backend exceeded the time limit.
    #[error("{0}")]
    GatewayTimeout(String),

    /// Backend error status, passed through unchanged.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<GatewayError> for HttpError {
    fn from(err: GatewayError) -> Self {
        let detail = err.detail();
        match err {
            GatewayError::InvalidRequest(_) => Self::UnprocessableEntity(detail),
            GatewayError::Upstream { status, .. } => Self::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message: detail,
            },
            GatewayError::ModelNotFound { .. } => Self::NotFound(detail),
            GatewayError::BackendUnavailable => Self::ServiceUnavailable(detail),
            GatewayError::Timeout => Self::GatewayTimeout(detail),
            GatewayError::InvalidBackendResponse
            | GatewayError::Communication(_)
            | GatewayError::ListModels(_)
            | GatewayError::Internal(_) => Self::Internal(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_errors_keep_their_status() {
        let cases = vec![
            GatewayError::InvalidRequest("bad".into()),
            GatewayError::Upstream {
                status: 429,
                detail: "Backend returned an error: slow down".into(),
            },
            GatewayError::InvalidBackendResponse,
            GatewayError::BackendUnavailable,
            GatewayError::Timeout,
            GatewayError::ModelNotFound {
                model: "ghost-model".into(),
            },
            GatewayError::Communication("redirect".into()),
            GatewayError::ListModels("refused".into()),
            GatewayError::Internal("?".into()),
        ];

        for err in cases {
            let expected = err.status_code();
            let detail = err.detail();
            let http: HttpError = err.into();
            assert_eq!(http.status().as_u16(), expected);
            assert_eq!(http.to_string(), detail);
        }
    }

    #[test]
    fn test_into_response_status() {
        let response = HttpError::GatewayTimeout("late".into()).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
