//! Axum router wiring.
//!
//! Exposes a single `/metrics` route. Every method lands on the same handler;
//! other paths fall through to axum's default 404.

use axum::{routing::any, Router};

use dumb_metrics_core::exposition::METRICS_PATH;

use crate::ops;

pub fn build_router() -> Router {
    Router::new().route(METRICS_PATH, any(ops::metrics))
}
