//! Listener lifecycle: bind, serve, shut down.

use std::future::Future;

use tokio::net::TcpListener;

use dumb_metrics_core::error::{DumbMetricsError, Result};
use dumb_metrics_core::exposition::METRICS_PATH;

use crate::{config::ListenConfig, router};

/// Bind the listening socket. Failure is fatal for the process; there is no
/// retry and no fallback port.
pub async fn bind(cfg: &ListenConfig) -> Result<TcpListener> {
    let addr = cfg.listen_addr();
    TcpListener::bind(addr)
        .await
        .map_err(|source| DumbMetricsError::Bind { addr, source })
}

/// Serve the router on `listener` until `shutdown` resolves. In-flight
/// requests are allowed to finish.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router::build_router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(DumbMetricsError::Serve)
}

/// Bind the fixed address and serve until Ctrl-C or SIGTERM.
pub async fn run() -> Result<()> {
    let cfg = ListenConfig::fixed();
    let listener = bind(&cfg).await?;

    let listen = listener.local_addr().unwrap_or(cfg.listen_addr());
    tracing::info!(%listen, path = METRICS_PATH, "dumb-metrics listening");

    serve(listener, shutdown_signal()).await?;
    tracing::info!("dumb-metrics stopped");
    Ok(())
}

/// Resolves on the first of Ctrl-C or SIGTERM. A handler that cannot be
/// installed never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
