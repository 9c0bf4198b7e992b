//! Request and response shapes.
//!
//! Every value here lives for a single request/response cycle.

mod model;
mod prompt;

pub use model::{ModelInfo, TagsResponse};
pub use prompt::{AskResponse, GenerateRequest, GenerateResponse, PromptRequest};
