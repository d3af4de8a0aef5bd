//! OS signal handling.
//!
//! # Responsibilities
//! - Translate SIGINT/SIGTERM into a shutdown trigger
//!
//! # Design Decisions
//! - Tokio's async signal streams; no custom handler state
//! - The first signal starts graceful shutdown; the process exits once the
//!   listener has drained

use std::sync::Arc;

use super::shutdown::Shutdown;

/// Spawn a task that triggers shutdown on SIGINT or SIGTERM.
pub fn install(shutdown: Arc<Shutdown>) {
    tokio::spawn(async move {
        wait_for_signal().await;
        tracing::info!("Shutdown signal received");
        shutdown.trigger();
    });
}

async fn wait_for_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
