//! The running entry-point context.
//!
//! # Responsibilities
//! - Hold the resolved application, its started plugins, and the dispatcher
//! - Track the lifecycle state machine
//! - Gate dispatch on the Running state
//! - Run ordered teardown exactly once
//!
//! # Design Decisions
//! - Explicit object, no process-wide singleton: tests run kernels side by side
//! - State is an atomic u8; transitions are one-directional
//! - Teardown never fails outward; every step is attempted

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

use crate::app::Application;
use crate::dispatch::{DispatchResult, Dispatcher};
use crate::plugin::Plugin;

/// Lifecycle states, one-directional. A stopped kernel is never restarted;
/// restart means bootstrapping a new one.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized = 0,
    Bootstrapping = 1,
    Running = 2,
    ShuttingDown = 3,
    Stopped = 4,
}

impl From<u8> for LifecycleState {
    fn from(val: u8) -> Self {
        match val {
            1 => LifecycleState::Bootstrapping,
            2 => LifecycleState::Running,
            3 => LifecycleState::ShuttingDown,
            4 => LifecycleState::Stopped,
            _ => LifecycleState::Uninitialized,
        }
    }
}

/// The entry-point context produced by [`bootstrap`](super::bootstrap).
///
/// Shared via `Arc` across the serving loop; everything reachable from here
/// is read-only after bootstrap, so concurrent dispatches need no locks.
pub struct Kernel {
    app: Arc<dyn Application>,
    plugins: Vec<Arc<dyn Plugin>>,
    dispatcher: Dispatcher,
    state: AtomicU8,
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kernel")
            .field("plugins", &self.plugins.len())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl Kernel {
    pub(crate) fn new(
        app: Arc<dyn Application>,
        plugins: Vec<Arc<dyn Plugin>>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            app,
            plugins,
            dispatcher,
            state: AtomicU8::new(LifecycleState::Bootstrapping as u8),
        }
    }

    pub(crate) fn mark_running(&self) {
        self.state
            .store(LifecycleState::Running as u8, Ordering::Release);
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state.load(Ordering::Acquire).into()
    }

    /// Dispatch one request through the handler chain.
    ///
    /// Valid only in `Running`; outside it the request is reported unhandled
    /// so the host fallback still answers the client.
    pub async fn dispatch(&self, request: Request<Body>) -> DispatchResult {
        if self.state() != LifecycleState::Running {
            tracing::warn!(state = ?self.state(), "Dispatch outside running state");
            return DispatchResult::Unhandled(request);
        }
        self.dispatcher.dispatch(request).await
    }

    /// Ordered teardown: the before-stop hook, then every plugin in reverse
    /// start order. Each failure is logged and cleanup proceeds.
    ///
    /// Only the first call after `Running` does work; later calls return
    /// immediately. Safe while requests are still draining; in-flight
    /// dispatches are not awaited.
    pub async fn shutdown(&self) {
        let from = LifecycleState::Running as u8;
        let to = LifecycleState::ShuttingDown as u8;
        if self
            .state
            .compare_exchange(from, to, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        if let Err(error) = self.app.before_stop().await {
            tracing::error!(error = %error, "Before-stop hook failed");
        }

        for plugin in self.plugins.iter().rev() {
            match plugin.stop().await {
                Ok(()) => tracing::info!(plugin = plugin.name(), "Plugin stopped"),
                Err(error) => {
                    tracing::error!(plugin = plugin.name(), error = %error, "Plugin stop failed")
                }
            }
        }

        self.state
            .store(LifecycleState::Stopped as u8, Ordering::Release);
    }
}
