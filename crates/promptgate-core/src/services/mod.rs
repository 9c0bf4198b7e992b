//! Application services.

mod gateway;

pub use gateway::GatewayService;
