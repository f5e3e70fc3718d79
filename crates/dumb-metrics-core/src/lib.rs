//! dumb-metrics core: the fixed exposition payload and the shared error type.
//!
//! This crate carries no transport or runtime dependencies. The server crate
//! owns the listener and the handler; everything it serves is defined here.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod exposition;

/// Shared result type.
pub use error::{DumbMetricsError, Result};
