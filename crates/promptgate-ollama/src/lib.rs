#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod error;

pub use client::OllamaClient;
pub use error::OllamaClientError;

// Silence unused dev-dependency warnings (used by tests/)
#[cfg(test)]
use axum as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio as _;
