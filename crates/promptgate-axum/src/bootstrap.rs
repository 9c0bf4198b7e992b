//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the HTTP adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::{Context, Result};
use promptgate_core::GatewayConfig;
use promptgate_core::ports::{ExchangeLogPort, InferenceBackendPort, TracingExchangeLog};
use promptgate_core::services::GatewayService;
use promptgate_ollama::OllamaClient;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::routes::create_router;

/// Application context for the Axum adapter.
///
/// Built once at startup and shared read-only by every handler.
#[derive(Debug)]
pub struct AxumContext {
    /// The gateway service.
    pub gateway: GatewayService,
    /// Configuration the service was built from.
    pub config: GatewayConfig,
}

impl AxumContext {
    /// Assemble a context from explicit ports.
    pub fn new(
        config: GatewayConfig,
        backend: Arc<dyn InferenceBackendPort>,
        log: Arc<dyn ExchangeLogPort>,
    ) -> Self {
        let gateway = GatewayService::new(&config, backend, log);
        Self { gateway, config }
    }
}

/// Wire the production stack: Ollama client + tracing exchange log.
pub fn bootstrap(config: GatewayConfig) -> Result<AxumContext> {
    info!(
        target: "promptgate.config",
        backend_url = %config.backend_url(),
        default_model = %config.default_model(),
        generate_timeout = ?config.generate_timeout(),
        "Gateway bootstrap resolved configuration"
    );

    let backend: Arc<dyn InferenceBackendPort> = Arc::new(OllamaClient::new(config.backend_url())?);
    let log: Arc<dyn ExchangeLogPort> = Arc::new(TracingExchangeLog::new());

    Ok(AxumContext::new(config, backend, log))
}

/// Serve the gateway on a pre-bound listener until `cancel` fires.
///
/// In-flight requests are allowed to finish during shutdown.
pub async fn serve(
    listener: TcpListener,
    ctx: AxumContext,
    cancel: CancellationToken,
) -> Result<()> {
    let addr = listener.local_addr()?;
    let app = create_router(ctx);

    info!("promptgate listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    info!("promptgate shut down");
    Ok(())
}

/// Bootstrap, bind the configured address and serve until `cancel` fires.
pub async fn start_server(config: GatewayConfig, cancel: CancellationToken) -> Result<()> {
    let addr = config.bind_address();
    let ctx = bootstrap(config)?;
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    serve(listener, ctx, cancel).await
}
