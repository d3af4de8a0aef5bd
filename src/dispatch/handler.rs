//! Handler chain primitives.
//!
//! # Responsibilities
//! - Define the Handler trait each chain node implements
//! - Carry per-request state through the chain (RequestContext)
//! - Walk the remaining chain via the Next cursor
//!
//! # Design Decisions
//! - A tagged Outcome replaces a shared mutable handled flag
//! - Handlers borrow the context; the dispatcher keeps ownership so the
//!   request survives a failing handler
//! - An exhausted chain yields Pass, never an error

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;

/// Error raised by a chain node. Contained by the dispatcher.
pub type HandlerError = tower::BoxError;

/// Per-request state, exclusively owned by one dispatch invocation.
pub struct RequestContext {
    /// Request path with the mount prefix already stripped.
    pub target: String,

    /// Raw query string, when present.
    pub query: Option<String>,

    /// Character encoding the application declared.
    pub encoding: Arc<str>,

    /// The inbound request.
    pub request: Request<Body>,
}

/// Decision of a chain node.
pub enum Outcome {
    /// The request is fully processed; later nodes and the host fallback
    /// are skipped.
    Handled(Response),

    /// The chain leaves this request to the host's fallback.
    Pass,
}

/// One node in the ordered handler chain.
///
/// A node terminates dispatch by returning [`Outcome::Handled`], defers by
/// running `next`, or bows out entirely with [`Outcome::Pass`]. Position in
/// the chain is significant; each node decides for itself whether control
/// continues.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(
        &self,
        ctx: &mut RequestContext,
        next: Next<'_>,
    ) -> Result<Outcome, HandlerError>;
}

/// Cursor over the remaining chain nodes.
pub struct Next<'a> {
    rest: &'a [Arc<dyn Handler>],
}

impl<'a> Next<'a> {
    pub(crate) fn over(rest: &'a [Arc<dyn Handler>]) -> Self {
        Self { rest }
    }

    /// Run the rest of the chain. Yields [`Outcome::Pass`] once exhausted.
    pub async fn run(self, ctx: &mut RequestContext) -> Result<Outcome, HandlerError> {
        match self.rest.split_first() {
            Some((head, rest)) => head.handle(ctx, Next { rest }).await,
            None => Ok(Outcome::Pass),
        }
    }
}
