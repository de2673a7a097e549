//! HTTP Server
//!
//! Binds the listener, serves the router and owns the store lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::{build_router, AppState};
use crate::config::Config;
use crate::error::Result;
use crate::store::ArtistStore;

/// HTTP server for the Artist API
///
/// The store is opened by the caller and handed in; the server closes it
/// after the last in-flight request has drained.
pub struct ArtistServer {
    listener: TcpListener,
    router: Router,
    store: Arc<dyn ArtistStore>,
    shutdown: Arc<Notify>,
}

impl ArtistServer {
    /// Bind the configured address and build the router
    pub async fn bind(config: &Config, store: Arc<dyn ArtistStore>) -> Result<Self> {
        let router = build_router(AppState::new(Arc::clone(&store)), config)?;
        let listener = TcpListener::bind(config.listen_addr()).await?;

        Ok(Self {
            listener,
            router,
            store,
            shutdown: Arc::new(Notify::new()),
        })
    }

    /// Address actually bound (useful with port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Handle that stops the server from another task
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(Arc::clone(&self.shutdown))
    }

    /// Serve until Ctrl+C or a shutdown handle fires, then close the store
    pub async fn run(self) -> Result<()> {
        let addr = self.local_addr()?;
        tracing::info!("Server listening on http://{}", addr);

        let shutdown = Arc::clone(&self.shutdown);
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = ctrl_c() => {
                        tracing::info!("Received Ctrl+C, initiating shutdown...");
                    }
                    _ = shutdown.notified() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("Server stopped, closing store");
        self.store.close().await
    }
}

/// Signals an [`ArtistServer`] to stop accepting and drain
#[derive(Clone)]
pub struct ShutdownHandle(Arc<Notify>);

impl ShutdownHandle {
    /// Safe to call before the server has started running
    pub fn shutdown(&self) {
        self.0.notify_one();
    }
}

/// Resolves on Ctrl+C; never resolves if the signal cannot be installed
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Could not listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
