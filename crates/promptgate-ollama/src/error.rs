//! Errors raised while constructing the Ollama client.
//!
//! Per-request failures are reported as `promptgate_core::BackendError`;
//! these only cover setup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OllamaClientError {
    /// The configured backend URL could not be parsed.
    #[error("Invalid backend URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The backend URL is not http or https.
    #[error("Unsupported backend URL scheme '{0}'")]
    UnsupportedScheme(String),

    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_message() {
        let source = url::Url::parse("::not a url").unwrap_err();
        let error = OllamaClientError::InvalidBaseUrl {
            url: "::not a url".to_string(),
            source,
        };
        assert!(error.to_string().contains("::not a url"));
    }
}
