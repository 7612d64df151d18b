//! HTTP server startup.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::lifecycle::{drain_with_deadline, serve_with_shutdown};
use super::shutdown::shutdown_signal;
use super::{Result, ServerError};
use crate::TRACING_TARGET_SERVER_STARTUP;
use crate::config::ServerConfig;

/// Binds the configured address and serves `app` with graceful shutdown.
pub(crate) async fn serve_http(app: Router, server_config: &ServerConfig) -> Result<()> {
    let server_addr = server_config.server_addr();

    let listener = TcpListener::bind(server_addr).await.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            addr = %server_addr,
            error = %err,
            "Failed to bind to address"
        );
        ServerError::bind_error(server_addr, err)
    })?;

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        addr = %server_addr,
        "Successfully bound to address"
    );

    // Notified once the signal fires so the drain deadline can start.
    let shutdown_started = Arc::new(Notify::new());
    let signal = {
        let shutdown_started = Arc::clone(&shutdown_started);
        async move {
            shutdown_signal().await;
            shutdown_started.notify_one();
        }
    };

    let shutdown_timeout = server_config.shutdown_timeout();
    serve_with_shutdown(server_config, || async move {
        let server = axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .into_future();

        drain_with_deadline(server, shutdown_started.notified(), shutdown_timeout).await
    })
    .await
}
