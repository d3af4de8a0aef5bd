//! Shared fixtures for integration testing.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;
use tokio::net::TcpListener;

use portico::app::Application;
use portico::dispatch::{Handler, HandlerError, Next, Outcome, RequestContext};
use portico::http::HostServer;
use portico::lifecycle::{bootstrap, HostContext, Kernel, Shutdown};
use portico::plugin::{Plugin, PluginError};
use portico::{AppRegistry, HostConfig};

/// Records lifecycle and dispatch events so tests can assert ordering.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

/// Plugin that records its starts and stops; stop can be told to fail.
pub struct RecordingPlugin {
    name: String,
    journal: Journal,
    fail_stop: bool,
}

impl RecordingPlugin {
    pub fn new(name: &str, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_owned(),
            journal: journal.clone(),
            fail_stop: false,
        })
    }

    pub fn with_failing_stop(name: &str, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_owned(),
            journal: journal.clone(),
            fail_stop: true,
        })
    }
}

#[async_trait]
impl Plugin for RecordingPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    async fn start(&self) -> Result<(), PluginError> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("start:{}", self.name));
        Ok(())
    }

    async fn stop(&self) -> Result<(), PluginError> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("stop:{}", self.name));
        if self.fail_stop {
            return Err(format!("{} refused to stop", self.name).into());
        }
        Ok(())
    }
}

/// Handler answering matching path prefixes with a fixed plain-text body.
pub struct PrefixHandler {
    prefix: String,
    body: &'static str,
}

impl PrefixHandler {
    pub fn new(prefix: &str, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            prefix: prefix.to_owned(),
            body,
        })
    }
}

#[async_trait]
impl Handler for PrefixHandler {
    async fn handle(
        &self,
        ctx: &mut RequestContext,
        next: Next<'_>,
    ) -> Result<Outcome, HandlerError> {
        if ctx.target.starts_with(&self.prefix) {
            let response = Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from(self.body))?;
            return Ok(Outcome::Handled(response));
        }
        next.run(ctx).await
    }
}

/// Handler that fails for matching path prefixes.
pub struct FaultyHandler {
    prefix: String,
}

impl FaultyHandler {
    pub fn new(prefix: &str) -> Arc<Self> {
        Arc::new(Self {
            prefix: prefix.to_owned(),
        })
    }
}

#[async_trait]
impl Handler for FaultyHandler {
    async fn handle(
        &self,
        ctx: &mut RequestContext,
        next: Next<'_>,
    ) -> Result<Outcome, HandlerError> {
        if ctx.target.starts_with(&self.prefix) {
            return Err(format!("handler blew up at {}", ctx.target).into());
        }
        next.run(ctx).await
    }
}

/// Handler recording every target the chain sees, always deferring.
pub struct TargetRecorder {
    journal: Journal,
}

impl TargetRecorder {
    pub fn new(journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            journal: journal.clone(),
        })
    }
}

#[async_trait]
impl Handler for TargetRecorder {
    async fn handle(
        &self,
        ctx: &mut RequestContext,
        next: Next<'_>,
    ) -> Result<Outcome, HandlerError> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("target:{}", ctx.target));
        next.run(ctx).await
    }
}

/// Application assembled from parts.
pub struct TestApp {
    pub handlers: Vec<Arc<dyn Handler>>,
    pub plugins: Vec<Arc<dyn Plugin>>,
}

impl TestApp {
    pub fn with_handlers(handlers: Vec<Arc<dyn Handler>>) -> Self {
        Self {
            handlers,
            plugins: Vec::new(),
        }
    }
}

#[async_trait]
impl Application for TestApp {
    fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.handlers.clone()
    }

    fn plugins(&self) -> Vec<Arc<dyn Plugin>> {
        self.plugins.clone()
    }
}

/// Boot `app` mounted at `mount_prefix` and serve it on an ephemeral port.
pub async fn spawn_host(
    app: TestApp,
    mount_prefix: &str,
) -> (SocketAddr, Arc<Kernel>, Arc<Shutdown>) {
    let app = Arc::new(app);
    let mut registry = AppRegistry::new();
    let factory_app = app.clone();
    registry.register("test", move || -> Arc<dyn Application> {
        factory_app.clone()
    });

    let host = HostContext::mounted_at(mount_prefix);
    let kernel = Arc::new(
        bootstrap(&registry, "test", &host)
            .await
            .expect("bootstrap failed"),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Arc::new(Shutdown::new());

    let server = HostServer::new(&HostConfig::default(), kernel.clone());
    let server_shutdown = shutdown.clone();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, kernel, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
