//! Exchange log port for backend diagnostics.
//!
//! Every stage of a backend exchange is reported here: the outgoing
//! payload, the reply status, headers and body, and each failure branch.
//! Recording is fire-and-forget and cannot influence the response.
//!
//! # Implementations
//!
//! - `TracingExchangeLog` - emits `tracing` events (production)
//! - `NoopExchangeLog` - discards everything (tests, quiet contexts)

use tracing::{debug, error};

/// One stage of a backend exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeEvent {
    /// Serialized request about to be sent.
    Payload {
        endpoint: &'static str,
        model: String,
        body: String,
    },
    /// Status code of the backend reply.
    Status { endpoint: &'static str, status: u16 },
    /// Headers of the backend reply.
    Headers {
        endpoint: &'static str,
        headers: Vec<(String, String)>,
    },
    /// Body of the backend reply.
    Body { endpoint: &'static str, body: String },
    /// A failure branch was taken.
    Failure {
        endpoint: &'static str,
        message: String,
    },
}

impl ExchangeEvent {
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Payload { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Headers { endpoint, .. }
            | Self::Body { endpoint, .. }
            | Self::Failure { endpoint, .. } => endpoint,
        }
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Port for recording backend exchanges.
///
/// Implementations must be thread-safe and should not block.
pub trait ExchangeLogPort: Send + Sync {
    fn record(&self, event: ExchangeEvent);
}

/// Writes exchange events to `tracing`.
///
/// Exchange stages go out at `debug`, failures at `error`, all under the
/// `promptgate.exchange` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingExchangeLog;

impl TracingExchangeLog {
    pub const fn new() -> Self {
        Self
    }
}

impl ExchangeLogPort for TracingExchangeLog {
    fn record(&self, event: ExchangeEvent) {
        match event {
            ExchangeEvent::Payload {
                endpoint,
                model,
                body,
            } => {
                debug!(target: "promptgate.exchange", endpoint, %model, "Sending request to model");
                debug!(target: "promptgate.exchange", endpoint, payload = %body, "Payload");
            }
            ExchangeEvent::Status { endpoint, status } => {
                debug!(target: "promptgate.exchange", endpoint, status, "Backend status code");
            }
            ExchangeEvent::Headers { endpoint, headers } => {
                debug!(target: "promptgate.exchange", endpoint, ?headers, "Backend headers");
            }
            ExchangeEvent::Body { endpoint, body } => {
                debug!(target: "promptgate.exchange", endpoint, %body, "Backend body");
            }
            ExchangeEvent::Failure { endpoint, message } => {
                error!(target: "promptgate.exchange", endpoint, "{message}");
            }
        }
    }
}

/// Discards all exchange events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExchangeLog;

impl NoopExchangeLog {
    pub const fn new() -> Self {
        Self
    }
}

impl ExchangeLogPort for NoopExchangeLog {
    fn record(&self, _event: ExchangeEvent) {}
}
