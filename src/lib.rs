//! Web entry-point dispatch kernel.
//!
//! Boots an application description (handler chain, plugins, lifecycle
//! hooks) behind an HTTP listener, routes every request through the chain,
//! and tears the application down in order on shutdown.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod plugin;

pub use app::{AppRegistry, Application};
pub use config::HostConfig;
pub use dispatch::{DispatchResult, Dispatcher, Handler, Outcome};
pub use http::HostServer;
pub use lifecycle::{bootstrap, HostContext, Kernel, Shutdown};
