//! Model listing types.

use serde::{Deserialize, Serialize};

/// A model installed on the backend, as reported by `/api/tags`.
///
/// Fields are passed through without validation or enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    /// Size on disk in bytes.
    pub size: u64,
    pub digest: String,
    pub modified_at: String,
}

/// Backend reply to `GET /api/tags`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}
