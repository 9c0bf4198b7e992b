//! `promptgate` entry point - the composition root.

use clap::Parser;
use promptgate_cli::{Cli, init_tracing};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Cli::parse().into_config();

    let cancel = CancellationToken::new();
    tokio::spawn(watch_shutdown_signals(cancel.clone()));

    if let Err(e) = promptgate_axum::start_server(config, cancel).await {
        error!("Server exited with error: {e:#}");
        return Err(e);
    }

    info!("Shut down cleanly");
    Ok(())
}

/// Cancel `token` on Ctrl+C, or SIGTERM on unix.
async fn watch_shutdown_signals(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }

    token.cancel();
}
