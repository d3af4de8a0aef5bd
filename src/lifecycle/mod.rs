//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve descriptor → Start plugins → Assemble dispatcher
//!         → after-start hook → Kernel in Running state
//!
//! Shutdown (shutdown.rs + kernel.rs):
//!     Signal or trigger → serving loop drains → before-stop hook
//!         → plugins stopped in reverse → Stopped
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//! ```
//!
//! # Design Decisions
//! - One-directional state machine; restart means a new kernel
//! - Startup is fail-fast with rollback; teardown is best-effort
//! - Kernel teardown runs after the listener drains, exactly once

pub mod kernel;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use kernel::{Kernel, LifecycleState};
pub use shutdown::Shutdown;
pub use startup::{bootstrap, HostContext, StartupError};
