//! Prompt completion request and response types.

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Client request to `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// Prompt text forwarded to the model.
    pub prompt: String,
    /// Model to use. When absent the configured default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl PromptRequest {
    /// Create a request that uses the default model.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
        }
    }

    /// Name an explicit model for this request.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Structural validation performed before any backend call.
    ///
    /// Only an empty prompt is rejected; whitespace is forwarded as is.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.prompt.is_empty() {
            return Err(GatewayError::InvalidRequest(
                "Field 'prompt' must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The model actually used for this request.
    ///
    /// An explicit model is returned verbatim; an absent or empty one
    /// falls back to `default_model`.
    pub fn effective_model<'a>(&'a self, default_model: &'a str) -> &'a str {
        match self.model.as_deref() {
            Some(model) if !model.is_empty() => model,
            _ => default_model,
        }
    }
}

/// Response body of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    /// Generated text. Empty when the backend produced nothing.
    pub response: String,
}

/// Body sent to the backend's `/api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    /// Always `false`; the gateway never streams.
    pub stream: bool,
}

impl GenerateRequest {
    /// Build a non-streaming generate request.
    pub fn non_streaming(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// The part of the backend's generate reply the gateway reads.
///
/// Other fields (timings, context, token counts) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}
