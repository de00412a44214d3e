//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`, written to stderr
//! - stdout is reserved for the final result URL
//! - Level configurable through `RUST_LOG`

pub mod logging;
