//! The gateway service: one backend call per request, classified once.
//!
//! `list_models` and `ask` each perform exactly one backend exchange and
//! map its outcome to either a domain value or a single [`GatewayError`].
//! There are no retries and no fallback model selection.

use std::sync::Arc;
use std::time::Duration;

use crate::config::GatewayConfig;
use crate::domain::{
    AskResponse, GenerateRequest, GenerateResponse, ModelInfo, PromptRequest, TagsResponse,
};
use crate::error::GatewayError;
use crate::ports::{
    BackendError, BackendReply, ExchangeEvent, ExchangeLogPort, InferenceBackendPort,
};

const TAGS_ENDPOINT: &str = "/api/tags";
const GENERATE_ENDPOINT: &str = "/api/generate";

/// Translates client requests into backend calls and backend outcomes into
/// client results.
///
/// Holds only immutable configuration and shared port handles, so a single
/// instance serves all requests concurrently.
pub struct GatewayService {
    backend: Arc<dyn InferenceBackendPort>,
    log: Arc<dyn ExchangeLogPort>,
    default_model: String,
    generate_timeout: Duration,
}

impl std::fmt::Debug for GatewayService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayService")
            .field("backend", &self.backend)
            .field("default_model", &self.default_model)
            .field("generate_timeout", &self.generate_timeout)
            .finish_non_exhaustive()
    }
}

impl GatewayService {
    pub fn new(
        config: &GatewayConfig,
        backend: Arc<dyn InferenceBackendPort>,
        log: Arc<dyn ExchangeLogPort>,
    ) -> Self {
        Self {
            backend,
            log,
            default_model: config.default_model().to_string(),
            generate_timeout: config.generate_timeout(),
        }
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// List the models installed on the backend, in backend order.
    ///
    /// Every failure collapses into [`GatewayError::ListModels`].
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, GatewayError> {
        let reply = self
            .backend
            .fetch_tags()
            .await
            .map_err(|e| self.list_failure(e.to_string()))?;

        self.record_reply(TAGS_ENDPOINT, &reply);

        if !reply.is_success() {
            return Err(self.list_failure(format!(
                "backend returned status {}: {}",
                reply.status, reply.body
            )));
        }

        let tags: TagsResponse =
            serde_json::from_str(&reply.body).map_err(|e| self.list_failure(e.to_string()))?;

        Ok(tags.models)
    }

    /// Send a prompt to the backend and return its completion.
    ///
    /// Failures are classified in this order: error status from the backend,
    /// unreadable body, connection failure, timeout, protocol error naming a
    /// missing model, other protocol error, anything else.
    pub async fn ask(&self, request: &PromptRequest) -> Result<AskResponse, GatewayError> {
        request.validate()?;

        let model = request.effective_model(&self.default_model).to_string();
        let payload = GenerateRequest::non_streaming(model.clone(), request.prompt.clone());

        self.log.record(ExchangeEvent::Payload {
            endpoint: GENERATE_ENDPOINT,
            model: model.clone(),
            body: serde_json::to_string(&payload).unwrap_or_default(),
        });

        let reply = match self.backend.generate(&payload, self.generate_timeout).await {
            Ok(reply) => reply,
            Err(err) => return Err(self.classify_transport_error(err, &model)),
        };

        self.record_reply(GENERATE_ENDPOINT, &reply);

        if !reply.is_success() {
            self.failure(
                GENERATE_ENDPOINT,
                format!("Backend returned status {}: {}", reply.status, reply.body),
            );
            return Err(upstream_error(reply.status, &reply.body, &model));
        }

        match serde_json::from_str::<GenerateResponse>(&reply.body) {
            Ok(parsed) => Ok(AskResponse {
                response: parsed.response,
            }),
            Err(e) => {
                self.failure(
                    GENERATE_ENDPOINT,
                    format!("Failed to decode backend JSON: {e}"),
                );
                Err(GatewayError::InvalidBackendResponse)
            }
        }
    }

    fn classify_transport_error(&self, err: BackendError, model: &str) -> GatewayError {
        match err {
            BackendError::Connect(reason) => {
                self.failure(
                    GENERATE_ENDPOINT,
                    format!("Could not connect to backend: {reason}"),
                );
                GatewayError::BackendUnavailable
            }
            BackendError::Timeout(reason) => {
                self.failure(GENERATE_ENDPOINT, format!("Backend request timed out: {reason}"));
                GatewayError::Timeout
            }
            BackendError::Protocol {
                status: Some(404),
                message,
            } => {
                self.failure(GENERATE_ENDPOINT, format!("Backend HTTP error: {message}"));
                GatewayError::ModelNotFound {
                    model: model.to_string(),
                }
            }
            BackendError::Protocol { message, .. } => {
                self.failure(GENERATE_ENDPOINT, format!("Backend HTTP error: {message}"));
                GatewayError::Communication(message)
            }
            BackendError::Other(message) => {
                self.failure(GENERATE_ENDPOINT, format!("Unexpected error: {message}"));
                GatewayError::Internal(message)
            }
        }
    }

    fn record_reply(&self, endpoint: &'static str, reply: &BackendReply) {
        self.log.record(ExchangeEvent::Status {
            endpoint,
            status: reply.status,
        });
        self.log.record(ExchangeEvent::Headers {
            endpoint,
            headers: reply.headers.clone(),
        });
        self.log.record(ExchangeEvent::Body {
            endpoint,
            body: reply.body.clone(),
        });
    }

    fn failure(&self, endpoint: &'static str, message: String) {
        self.log.record(ExchangeEvent::Failure { endpoint, message });
    }

    fn list_failure(&self, message: String) -> GatewayError {
        self.failure(TAGS_ENDPOINT, format!("Failed to list models: {message}"));
        GatewayError::ListModels(message)
    }
}

/// Error for a backend reply with a non-success status.
///
/// A 404 from the generate endpoint means the model is not installed, so
/// the detail names the model as well as carrying the backend body.
fn upstream_error(status: u16, body: &str, model: &str) -> GatewayError {
    let detail = if status == 404 {
        format!(
            "Model '{model}' not found. Verify that the model is installed. Backend response: {body}"
        )
    } else {
        format!("Backend returned an error: {body}")
    };
    GatewayError::Upstream { status, detail }
}
