//! HTTP server startup, lifecycle and graceful shutdown.

mod error;
mod http_server;
mod lifecycle;
mod shutdown;

use axum::Router;
pub use error::{Result, ServerError};
use http_server::serve_http;

use crate::config::ServerConfig;

/// Binds the configured address and serves `app` until a shutdown signal.
///
/// In-flight requests get up to [`ServerConfig::shutdown_timeout`] to finish
/// once the signal arrives.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails while
/// running.
pub async fn serve(app: Router, config: &ServerConfig) -> Result<()> {
    serve_http(app, config).await
}
