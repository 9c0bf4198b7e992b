//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the gateway service expects from
//! infrastructure. They contain no HTTP client or server types.

pub mod exchange_log;
pub mod inference_backend;

pub use exchange_log::{ExchangeEvent, ExchangeLogPort, NoopExchangeLog, TracingExchangeLog};
pub use inference_backend::{BackendError, BackendReply, InferenceBackendPort};
