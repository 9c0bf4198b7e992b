//! reqwest-backed Ollama client.

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use promptgate_core::domain::GenerateRequest;
use promptgate_core::ports::{BackendError, BackendReply, InferenceBackendPort};
use tracing::debug;
use url::Url;

use crate::error::OllamaClientError;

const TAGS_PATH: &str = "api/tags";
const GENERATE_PATH: &str = "api/generate";

/// Client for an Ollama-compatible inference server.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: Url,
}

impl OllamaClient {
    /// Create a client for the backend at `base_url` with a fresh
    /// connection pool.
    pub fn new(base_url: &str) -> Result<Self, OllamaClientError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("promptgate/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(10)
            .build()?;
        Self::with_client(client, base_url)
    }

    /// Create a client that reuses an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, OllamaClientError> {
        let mut url = Url::parse(base_url).map_err(|source| OllamaClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(OllamaClientError::UnsupportedScheme(other.to_string())),
        }

        // Url::join replaces the last segment unless the base ends in '/'.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::Other(format!("Invalid endpoint URL: {e}")))
    }
}

#[async_trait]
impl InferenceBackendPort for OllamaClient {
    async fn fetch_tags(&self) -> Result<BackendReply, BackendError> {
        let url = self.endpoint(TAGS_PATH)?;
        debug!(%url, "Fetching model list");

        let response = self.client.get(url).send().await.map_err(classify)?;
        read_reply(response).await
    }

    async fn generate(
        &self,
        request: &GenerateRequest,
        timeout: Duration,
    ) -> Result<BackendReply, BackendError> {
        let url = self.endpoint(GENERATE_PATH)?;
        debug!(%url, model = %request.model, ?timeout, "Forwarding generate request");

        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(classify)?;
        read_reply(response).await
    }
}

/// Drain a response into a `BackendReply`.
///
/// The connection goes back to the pool (or is closed) once the body has
/// been consumed or the response dropped.
async fn read_reply(response: reqwest::Response) -> Result<BackendReply, BackendError> {
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let body = response.text().await.map_err(classify)?;

    Ok(BackendReply {
        status,
        headers,
        body,
    })
}

/// Sort a reqwest failure into the port's transport taxonomy.
///
/// Connection failures are checked before timeouts so that a connect
/// timeout reports the backend as unreachable.
fn classify(err: reqwest::Error) -> BackendError {
    let message = describe(&err);
    if err.is_connect() {
        BackendError::Connect(message)
    } else if err.is_timeout() {
        BackendError::Timeout(message)
    } else if err.is_status()
        || err.is_redirect()
        || err.is_request()
        || err.is_body()
        || err.is_decode()
    {
        BackendError::Protocol {
            status: err.status().map(|s| s.as_u16()),
            message,
        }
    } else {
        BackendError::Other(message)
    }
}

/// Error text including its source chain; reqwest's own `Display` stops
/// at "error sending request".
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
