//! Process-wide gateway configuration.
//!
//! The configuration is built once at startup and shared read-only with
//! every request handler. There is no runtime reload.

use std::time::Duration;

/// Default base URL of the inference backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:11434";

/// Model used when a prompt request does not name one.
pub const DEFAULT_MODEL: &str = "deepseek-r1:14b";

/// Upper bound on a single generate call, in seconds.
pub const DEFAULT_GENERATE_TIMEOUT_SECS: u64 = 30;

/// Upper bound on a single generate call.
pub const DEFAULT_GENERATE_TIMEOUT: Duration = Duration::from_secs(DEFAULT_GENERATE_TIMEOUT_SECS);

/// Address the gateway listens on by default.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the gateway listens on by default.
pub const DEFAULT_PORT: u16 = 8000;

/// Configuration for the gateway.
///
/// Use the builder methods to customize the defaults.
///
/// # Example
///
/// ```
/// use promptgate_core::GatewayConfig;
/// use std::time::Duration;
///
/// let config = GatewayConfig::new()
///     .with_backend_url("http://10.0.0.5:11434")
///     .with_default_model("llama3.2:3b")
///     .with_generate_timeout(Duration::from_secs(60));
///
/// assert_eq!(config.default_model(), "llama3.2:3b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    backend_url: String,
    default_model: String,
    generate_timeout: Duration,
    host: String,
    port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            generate_timeout: DEFAULT_GENERATE_TIMEOUT,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl GatewayConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the inference backend.
    #[must_use]
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    /// Set the model substituted when a request omits `model`.
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Set the bound on generate calls.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_generate_timeout(mut self, timeout: Duration) -> Self {
        self.generate_timeout = timeout;
        self
    }

    /// Set the listen host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the listen port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub const fn generate_timeout(&self) -> Duration {
        self.generate_timeout
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub const fn port(&self) -> u16 {
        self.port
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
