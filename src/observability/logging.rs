//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Respect RUST_LOG over the configured level
//!
//! # Design Decisions
//! - tracing for structured events; fields over formatted strings
//! - The environment wins over the config file, so operators can raise
//!   verbosity without editing config

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `level` comes from `observability.log_level`; `RUST_LOG` overrides it.
pub fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
