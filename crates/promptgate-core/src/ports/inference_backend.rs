//! Inference backend port.
//!
//! This port is a thin transport: it performs one HTTP exchange with the
//! backend and hands back the raw status, headers and body. Interpreting
//! the reply (status checks, JSON decoding, error classification) is done
//! by the gateway service so it can be tested without a network.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::GenerateRequest;

/// A complete backend reply with the body already read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status: u16,
    /// Response headers in arrival order.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl BackendReply {
    /// A 200 reply with no headers.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level failures. A reply with an error status is NOT one of
/// these; it comes back as an `Ok(BackendReply)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The call did not complete within its bound.
    #[error("timed out: {0}")]
    Timeout(String),

    /// HTTP protocol failure (redirect loop, broken body, status error).
    #[error("{message}")]
    Protocol {
        /// Status attached to the failure, when the transport knows one.
        status: Option<u16>,
        message: String,
    },

    /// Anything the transport cannot categorize.
    #[error("{0}")]
    Other(String),
}

/// Port for talking to the inference backend.
///
/// Implementations must release the connection on every exit path and must
/// not retry.
#[async_trait]
pub trait InferenceBackendPort: Send + Sync + fmt::Debug {
    /// `GET /api/tags` using the transport's default timeout.
    async fn fetch_tags(&self) -> Result<BackendReply, BackendError>;

    /// `POST /api/generate`, bounded by `timeout`.
    async fn generate(
        &self,
        request: &GenerateRequest,
        timeout: Duration,
    ) -> Result<BackendReply, BackendError>;
}
