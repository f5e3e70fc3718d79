//! dumb-metrics server
//!
//! Serves a fixed beanstalkd-style gauge exposition on `0.0.0.0:8888/metrics`.
//! Takes no arguments. `RUST_LOG` filters log output only.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dumb_metrics_server::server;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match server::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "dumb-metrics failed");
            ExitCode::FAILURE
        }
    }
}
