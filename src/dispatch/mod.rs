//! Request-dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (host transport)
//!     → dispatcher.rs (strip mount prefix, build RequestContext)
//!     → handler.rs (chain walk: each node handles or defers)
//!     → DispatchResult::Handled(response)   → host sends it
//!     → DispatchResult::Unhandled(request)  → host fallback (404, static files)
//! ```
//!
//! # Design Decisions
//! - The chain decides; the dispatcher never synthesizes a response
//! - Handler failures are contained here, logged once with path and query
//! - Dispatch state is immutable after bootstrap and shared without locks

pub mod dispatcher;
pub mod handler;

pub use dispatcher::{DispatchResult, Dispatcher};
pub use handler::{Handler, HandlerError, Next, Outcome, RequestContext};
