//! Operational HTTP endpoints.
//!
//! - `/metrics` : the fixed exposition payload, for any method

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use dumb_metrics_core::exposition::{payload_bytes, CONTENT_TYPE};

/// Static responder. The request is never inspected.
pub async fn metrics() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, CONTENT_TYPE)],
        Bytes::from_static(payload_bytes()),
    )
        .into_response()
}
