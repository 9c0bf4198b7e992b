//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped `AxumContext`; nothing in it is mutable.
pub type AppState = Arc<AxumContext>;
