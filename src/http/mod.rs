//! HTTP hosting subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware, entry handler)
//!     → Kernel::dispatch (chain decides)
//!     → Handled:   response sent as-is
//!     → Unhandled: fallback seam answers (404, static files)
//! ```

pub mod request;
pub mod server;

pub use request::UuidRequestId;
pub use server::{Fallback, HostServer, NotFoundFallback};
