//! HTTP handlers.
//!
//! Handlers are thin: parse, delegate to `GatewayService`, map errors.

pub mod ask;
pub mod models;
pub mod system;
