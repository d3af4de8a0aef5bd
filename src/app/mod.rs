//! Application description subsystem.
//!
//! # Data Flow
//! ```text
//! descriptor string (from host config)
//!     → registry.rs (factory lookup)
//!     → Arc<dyn Application> (encoding, handler chain, plugins, hooks)
//!     → lifecycle::bootstrap (plugins started, hooks run)
//!     → frozen into the Kernel
//! ```
//!
//! # Design Decisions
//! - Applications are registered explicitly; no construct-by-name reflection
//! - An Application is immutable once bootstrap completes
//! - Hooks are async and fallible; bootstrap decides what is fatal

pub mod echo;
pub mod registry;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::dispatch::Handler;
use crate::plugin::Plugin;

pub use registry::AppRegistry;

impl fmt::Debug for dyn Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application")
            .field("encoding", &self.encoding())
            .finish_non_exhaustive()
    }
}

/// Error produced by an application lifecycle hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Blueprint of one application: its handler chain, the plugins it owns,
/// and the lifecycle hooks run around them.
///
/// Everything an implementation returns here is read once at bootstrap and
/// treated as immutable for the rest of the process lifetime.
#[async_trait]
pub trait Application: Send + Sync {
    /// Character encoding recorded on every request context and stamped onto
    /// handled text responses that omit a charset.
    fn encoding(&self) -> &str {
        "utf-8"
    }

    /// The ordered handler chain, front to back.
    fn handlers(&self) -> Vec<Arc<dyn Handler>>;

    /// Plugins owned by this application, in start order.
    fn plugins(&self) -> Vec<Arc<dyn Plugin>> {
        Vec::new()
    }

    /// Runs once plugins are started and the dispatcher is assembled.
    /// A failure aborts bootstrap.
    async fn after_start(&self) -> Result<(), HookError> {
        Ok(())
    }

    /// Runs first during shutdown. A failure is logged; cleanup proceeds.
    async fn before_stop(&self) -> Result<(), HookError> {
        Ok(())
    }
}
