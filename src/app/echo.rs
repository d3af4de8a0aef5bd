//! Built-in diagnostic application.
//!
//! Registered as `echo`; answers every request with a JSON summary of what
//! the chain saw. Useful for verifying a deployment end to end before a
//! real application is registered.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;

use crate::app::Application;
use crate::dispatch::{Handler, HandlerError, Next, Outcome, RequestContext};

/// Factory for the registry.
pub fn new_app() -> Arc<dyn Application> {
    Arc::new(EchoApp)
}

/// Application that handles every request with a request summary.
pub struct EchoApp;

impl Application for EchoApp {
    fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        vec![Arc::new(EchoHandler)]
    }
}

struct EchoHandler;

#[async_trait]
impl Handler for EchoHandler {
    async fn handle(
        &self,
        ctx: &mut RequestContext,
        _next: Next<'_>,
    ) -> Result<Outcome, HandlerError> {
        let summary = serde_json::json!({
            "method": ctx.request.method().as_str(),
            "path": ctx.target,
            "query": ctx.query,
        });
        let response = Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(summary.to_string()))?;
        Ok(Outcome::Handled(response))
    }
}
