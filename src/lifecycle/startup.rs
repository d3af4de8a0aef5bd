//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve the application descriptor through the registry
//! - Start plugins in registration order
//! - Assemble the dispatcher (encoding, mount-prefix offset, chain)
//! - Run the after-start hook and hand over a Running kernel
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, nothing half-started survives
//! - Plugins started before a failure are stopped again, in reverse order
//! - The mount-prefix offset is computed here, once

use std::sync::Arc;

use thiserror::Error;

use super::kernel::Kernel;
use crate::app::registry::{AppRegistry, ResolveError};
use crate::app::HookError;
use crate::dispatch::Dispatcher;
use crate::plugin::{Plugin, PluginError};

/// Fatal startup failures. None of these leave a running kernel behind.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot resolve application: {0}")]
    ConfigResolution(#[from] ResolveError),

    #[error("plugin `{name}` failed to start: {source}")]
    PluginStart { name: String, source: PluginError },

    #[error("after-start hook failed: {source}")]
    PostStartHook { source: HookError },
}

/// Host-environment facts the kernel needs at bootstrap.
#[derive(Debug, Clone, Default)]
pub struct HostContext {
    /// Path segment the host mounts the application under.
    /// Empty or `/` means the application owns the whole path space.
    pub mount_prefix: String,
}

impl HostContext {
    pub fn mounted_at(prefix: impl Into<String>) -> Self {
        Self {
            mount_prefix: prefix.into(),
        }
    }
}

/// Resolve, start and freeze an application into a running kernel.
///
/// The sequence: resolve descriptor → start plugins in order → assemble
/// dispatcher → after-start hook → `Running`. Any failure stops the plugins
/// that already started (reverse order) and surfaces a [`StartupError`].
pub async fn bootstrap(
    registry: &AppRegistry,
    descriptor: &str,
    host: &HostContext,
) -> Result<Kernel, StartupError> {
    let app = registry.resolve(descriptor)?;
    tracing::info!(app = descriptor, mount_prefix = %host.mount_prefix, "Bootstrapping application");

    let plugins = app.plugins();
    let mut started: Vec<Arc<dyn Plugin>> = Vec::with_capacity(plugins.len());
    for plugin in &plugins {
        if let Err(source) = plugin.start().await {
            tracing::error!(plugin = plugin.name(), error = %source, "Plugin start failed");
            roll_back(&started).await;
            return Err(StartupError::PluginStart {
                name: plugin.name().to_owned(),
                source,
            });
        }
        tracing::info!(plugin = plugin.name(), "Plugin started");
        started.push(plugin.clone());
    }

    let dispatcher = Dispatcher::new(app.encoding(), &host.mount_prefix, app.handlers());
    let kernel = Kernel::new(app.clone(), plugins, dispatcher);

    if let Err(source) = app.after_start().await {
        tracing::error!(error = %source, "After-start hook failed");
        roll_back(&started).await;
        return Err(StartupError::PostStartHook { source });
    }

    kernel.mark_running();
    tracing::info!(app = descriptor, "Application running");
    Ok(kernel)
}

/// Stop plugins that started before a bootstrap failure, newest first.
async fn roll_back(started: &[Arc<dyn Plugin>]) {
    for plugin in started.iter().rev() {
        if let Err(error) = plugin.stop().await {
            tracing::error!(plugin = plugin.name(), error = %error, "Plugin stop failed during rollback");
        }
    }
}
