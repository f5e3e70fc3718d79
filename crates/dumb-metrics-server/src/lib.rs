//! dumb-metrics server library entry.
//!
//! Wires the fixed `/metrics` responder into an axum router and owns the
//! listener lifecycle. Consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod config;
pub mod ops;
pub mod router;
pub mod server;
