//! Request identification.
//!
//! # Responsibilities
//! - Generate a UUID v4 request ID as early as possible
//! - Propagate the ID onto responses for correlation
//!
//! # Design Decisions
//! - tower-http's set/propagate layers do the header plumbing; only the
//!   ID maker lives here

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Produces a fresh UUID v4 for every inbound request.
#[derive(Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}
