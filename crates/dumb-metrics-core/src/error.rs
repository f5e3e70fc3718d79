//! Shared error type across dumb-metrics crates.

use std::net::SocketAddr;

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, DumbMetricsError>;

/// Process-level failures. Request-level errors never reach this type; the
/// HTTP stack answers those with its own defaults.
#[derive(Debug, Error)]
pub enum DumbMetricsError {
    #[error("bind {addr} failed: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("serve failed: {0}")]
    Serve(#[source] std::io::Error),
}

impl DumbMetricsError {
    /// Stable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            DumbMetricsError::Bind { .. } => "BIND_FAILED",
            DumbMetricsError::Serve(_) => "SERVE_FAILED",
        }
    }
}
