//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging only; no metrics exporter in this layer
//! - Request IDs flow into log events via the tracing middleware

pub mod logging;

pub use logging::init_logging;
