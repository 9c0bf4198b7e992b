#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{
    DEFAULT_BACKEND_URL, DEFAULT_GENERATE_TIMEOUT, DEFAULT_GENERATE_TIMEOUT_SECS, DEFAULT_HOST,
    DEFAULT_MODEL, DEFAULT_PORT, GatewayConfig,
};
pub use domain::{AskResponse, GenerateRequest, GenerateResponse, ModelInfo, PromptRequest, TagsResponse};
pub use error::GatewayError;
pub use ports::{
    BackendError, BackendReply, ExchangeEvent, ExchangeLogPort, InferenceBackendPort,
    NoopExchangeLog, TracingExchangeLog,
};
pub use services::GatewayService;

#[cfg(test)]
use tokio as _;
