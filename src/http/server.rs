//! Host-side HTTP wiring.
//!
//! # Responsibilities
//! - Route every inbound request into the kernel
//! - Serve the host fallback when the chain declines a request
//! - Wire up middleware (tracing, request ID, timeout)
//! - Drain gracefully on shutdown
//!
//! # Design Decisions
//! - One catch-all route; the handler chain owns all routing semantics
//! - The fallback is a seam: hosts swap in static files or error pages
//! - The kernel is torn down by the caller after the listener drains

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::HostConfig;
use crate::dispatch::DispatchResult;
use crate::http::request::UuidRequestId;
use crate::lifecycle::{Kernel, Shutdown};

/// Serves requests the handler chain declined.
#[async_trait]
pub trait Fallback: Send + Sync {
    async fn respond(&self, request: Request<Body>) -> Response;
}

/// Default fallback: a bare 404, no synthesized body.
pub struct NotFoundFallback;

#[async_trait]
impl Fallback for NotFoundFallback {
    async fn respond(&self, _request: Request<Body>) -> Response {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// State injected into the entry handler.
#[derive(Clone)]
struct HostState {
    kernel: Arc<Kernel>,
    fallback: Arc<dyn Fallback>,
}

/// HTTP server hosting one kernel.
pub struct HostServer {
    router: Router,
}

impl HostServer {
    /// Create a server with the default 404 fallback.
    pub fn new(config: &HostConfig, kernel: Arc<Kernel>) -> Self {
        Self::with_fallback(config, kernel, Arc::new(NotFoundFallback))
    }

    /// Create a server with a host-supplied fallback
    /// (static files, error pages).
    pub fn with_fallback(
        config: &HostConfig,
        kernel: Arc<Kernel>,
        fallback: Arc<dyn Fallback>,
    ) -> Self {
        let state = HostState { kernel, fallback };
        let router = Router::new()
            .route("/{*path}", any(entry))
            .route("/", any(entry))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
            .layer(TraceLayer::new_for_http());
        Self { router }
    }

    /// Serve until the shutdown coordinator fires, then drain and return.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: Arc<Shutdown>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { shutdown.requested().await })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Entry handler: kernel first, host fallback when the chain declines.
async fn entry(State(state): State<HostState>, request: Request<Body>) -> Response {
    match state.kernel.dispatch(request).await {
        DispatchResult::Handled(response) => response,
        DispatchResult::Unhandled(request) => state.fallback.respond(request).await,
    }
}
