//! Request dispatch.
//!
//! # Responsibilities
//! - Normalize the request path against the mount prefix
//! - Record the application encoding before the chain runs
//! - Invoke the handler chain and contain its failures
//! - Report Handled vs Unhandled to the host
//!
//! # Design Decisions
//! - One dispatch attempt per request; failure degrades to Unhandled
//! - The prefix offset is computed once at construction, applied per request
//! - Handler errors are logged with the `path?query` target, never re-raised

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderValue, Request};
use axum::response::Response;

use super::handler::{Handler, Next, Outcome, RequestContext};

/// Final disposition of one dispatch invocation.
#[derive(Debug)]
pub enum DispatchResult {
    /// The chain produced a response; the host must not apply its fallback.
    Handled(Response),

    /// The chain declined (or failed); the host serves its own fallback.
    Unhandled(Request<Body>),
}

/// Immutable dispatch state, shared by all in-flight requests.
pub struct Dispatcher {
    handlers: Vec<Arc<dyn Handler>>,
    encoding: Arc<str>,
    prefix_len: usize,
}

impl Dispatcher {
    /// Assemble a dispatcher. The mount prefix contributes a fixed offset:
    /// zero when empty or `/`, its length otherwise.
    pub fn new(encoding: &str, mount_prefix: &str, handlers: Vec<Arc<dyn Handler>>) -> Self {
        let prefix_len = if mount_prefix.is_empty() || mount_prefix == "/" {
            0
        } else {
            mount_prefix.len()
        };
        Self {
            handlers,
            encoding: Arc::from(encoding),
            prefix_len,
        }
    }

    /// Run one request through the handler chain.
    pub async fn dispatch(&self, request: Request<Body>) -> DispatchResult {
        let target = self.strip_prefix(request.uri().path());
        let query = request.uri().query().map(str::to_owned);

        let mut ctx = RequestContext {
            target,
            query,
            encoding: self.encoding.clone(),
            request,
        };

        match Next::over(&self.handlers).run(&mut ctx).await {
            Ok(Outcome::Handled(response)) => {
                DispatchResult::Handled(self.apply_encoding(response))
            }
            Ok(Outcome::Pass) => DispatchResult::Unhandled(ctx.request),
            Err(error) => {
                let path = match &ctx.query {
                    Some(qs) => format!("{}?{}", ctx.target, qs),
                    None => ctx.target.clone(),
                };
                tracing::error!(path = %path, error = %error, "Handler chain error");
                DispatchResult::Unhandled(ctx.request)
            }
        }
    }

    /// Remove exactly the precomputed prefix length from the path.
    fn strip_prefix(&self, path: &str) -> String {
        if self.prefix_len == 0 {
            path.to_owned()
        } else {
            path.get(self.prefix_len..).unwrap_or_default().to_owned()
        }
    }

    /// Stamp the configured charset onto text responses that omit one.
    /// Headers are still in memory here; nothing has reached the wire.
    fn apply_encoding(&self, mut response: Response) -> Response {
        let raw = match response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            Some(value) => value.to_owned(),
            None => return response,
        };
        if raw.starts_with("text/") && !raw.to_ascii_lowercase().contains("charset=") {
            if let Ok(stamped) = HeaderValue::from_str(&format!("{raw}; charset={}", self.encoding))
            {
                response.headers_mut().insert(header::CONTENT_TYPE, stamped);
            }
        }
        response
    }
}
