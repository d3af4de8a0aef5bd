//! Shutdown coordination.
//!
//! # Responsibilities
//! - Fan a single stop decision out to everything serving traffic
//! - Let the serving loop await the decision without polling
//!
//! # Design Decisions
//! - Broadcast channel plus a fired flag: a trigger that lands before a
//!   waiter subscribes is still observed
//! - Triggering twice is harmless

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Long-running tasks wait on [`Shutdown::requested`]; one call to
/// [`Shutdown::trigger`] (from a signal handler, an admin action, a test)
/// releases them all.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
    fired: AtomicBool,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            fired: AtomicBool::new(false),
        }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Release every current and future waiter.
    pub fn trigger(&self) {
        self.fired.store(true, Ordering::SeqCst);
        let _ = self.tx.send(());
    }

    /// Resolve once shutdown has been triggered. Returns immediately when
    /// the trigger already happened.
    pub async fn requested(&self) {
        if self.fired.load(Ordering::SeqCst) {
            return;
        }
        let mut rx = self.tx.subscribe();
        if self.fired.load(Ordering::SeqCst) {
            return;
        }
        let _ = rx.recv().await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
