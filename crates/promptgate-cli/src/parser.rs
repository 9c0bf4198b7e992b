//! Command-line arguments.
//!
//! Every option can also come from the environment, so the binary runs
//! unchanged under a process manager or from a `.env` file.

use std::time::Duration;

use clap::Parser;
use promptgate_core::{
    DEFAULT_BACKEND_URL, DEFAULT_GENERATE_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_MODEL, DEFAULT_PORT,
    GatewayConfig,
};

/// HTTP gateway in front of a local Ollama service.
#[derive(Debug, Parser)]
#[command(name = "promptgate")]
#[command(about = "HTTP gateway in front of a local Ollama service")]
#[command(version)]
pub struct Cli {
    /// Base URL of the Ollama backend
    #[arg(long, env = "PROMPTGATE_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Model used when a request does not name one
    #[arg(long, env = "PROMPTGATE_DEFAULT_MODEL", default_value = DEFAULT_MODEL)]
    pub default_model: String,

    /// Address to listen on
    #[arg(long, env = "PROMPTGATE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PROMPTGATE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Upper bound on a single generate call, in seconds
    #[arg(
        long,
        env = "PROMPTGATE_GENERATE_TIMEOUT_SECS",
        default_value_t = DEFAULT_GENERATE_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub generate_timeout_secs: u64,
}

impl Cli {
    /// Build the gateway configuration from parsed arguments.
    pub fn into_config(self) -> GatewayConfig {
        GatewayConfig::new()
            .with_backend_url(self.backend_url)
            .with_default_model(self.default_model)
            .with_host(self.host)
            .with_port(self.port)
            .with_generate_timeout(Duration::from_secs(self.generate_timeout_secs))
    }
}
