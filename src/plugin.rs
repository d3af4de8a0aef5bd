//! Plugin lifecycle contract.
//!
//! # Responsibilities
//! - Represent a long-lived resource owned by the application
//!   (connection pools, schedulers, caches)
//! - Start during bootstrap, in registration order
//! - Stop during shutdown, in reverse start order
//!
//! # Design Decisions
//! - Start failures are fatal to bootstrap; stop failures are logged and skipped
//! - `&self` receivers: plugins manage their own interior state

use async_trait::async_trait;

/// Error produced by a plugin's start or stop step.
pub type PluginError = Box<dyn std::error::Error + Send + Sync>;

/// A long-lived resource with an explicit start/stop lifecycle.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &str;

    /// Acquire the plugin's resources. Called once during bootstrap.
    async fn start(&self) -> Result<(), PluginError>;

    /// Release the plugin's resources. Called once during shutdown.
    async fn stop(&self) -> Result<(), PluginError>;
}
