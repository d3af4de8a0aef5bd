//! portico: boots a registered application behind an HTTP listener.
//!
//! Startup order: load config → init logging → register applications →
//! bootstrap the kernel → serve → tear the kernel down once the listener
//! has drained.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use portico::app::{echo, AppRegistry};
use portico::config::{load_config, HostConfig};
use portico::http::HostServer;
use portico::lifecycle::{bootstrap, signals, HostContext, Shutdown};
use portico::observability::init_logging;

#[derive(Parser, Debug)]
#[command(name = "portico", about = "Web entry-point dispatch kernel")]
struct Args {
    /// Path to the host configuration file (TOML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => HostConfig::default(),
    };

    init_logging(&config.observability.log_level);

    tracing::info!(
        app = %config.entry.app,
        mount_prefix = %config.entry.mount_prefix,
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    let mut registry = AppRegistry::new();
    registry.register("echo", echo::new_app);

    let host = HostContext::mounted_at(config.entry.mount_prefix.clone());
    let kernel = Arc::new(bootstrap(&registry, &config.entry.app, &host).await?);

    let shutdown = Arc::new(Shutdown::new());
    signals::install(shutdown.clone());

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HostServer::new(&config, kernel.clone());
    server.run(listener, shutdown).await?;

    kernel.shutdown().await;
    tracing::info!("Shutdown complete");
    Ok(())
}
