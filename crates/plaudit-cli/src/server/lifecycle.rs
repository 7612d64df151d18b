//! Server lifecycle: readiness logging, bounded draining and exit reporting.

use std::future::Future;
use std::io;
use std::time::{Duration, Instant};

use super::{Result, ServerError};
use crate::config::ServerConfig;
use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Runs the server future produced by `serve_fn`, logging readiness,
/// uptime and recovery suggestions.
///
/// # Errors
///
/// Wraps any I/O error from the server in [`ServerError::Runtime`].
pub(crate) async fn serve_with_shutdown<F>(
    server_config: &ServerConfig,
    serve_fn: impl FnOnce() -> F,
) -> Result<()>
where
    F: Future<Output = io::Result<()>>,
{
    let start_time = Instant::now();

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        addr = %server_config.server_addr(),
        "Server is ready and listening for connections"
    );

    if server_config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_SERVER_STARTUP,
            "Server is bound to all interfaces. Ensure firewall rules are properly configured."
        );
    }

    let result = serve_fn().await;
    let uptime_secs = start_time.elapsed().as_secs();

    match result {
        Ok(()) => {
            tracing::info!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                uptime_secs,
                "Shutdown completed"
            );
            Ok(())
        }
        Err(err) => {
            let error = ServerError::Runtime(err);
            tracing::error!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                error = %error,
                code = error.error_code(),
                recoverable = error.is_recoverable(),
                uptime_secs,
                "Fatal error"
            );

            if let Some(suggestion) = error.suggestion() {
                tracing::info!(
                    target: TRACING_TARGET_SERVER_SHUTDOWN,
                    suggestion,
                    "Recovery suggestion"
                );
            }

            Err(error)
        }
    }
}

/// Drives `server` to completion, but gives up `deadline` after
/// `shutdown_started` resolves.
///
/// Connections still open when the deadline passes are dropped with the
/// server future.
pub(crate) async fn drain_with_deadline<S, T>(
    server: S,
    shutdown_started: T,
    deadline: Duration,
) -> io::Result<()>
where
    S: Future<Output = io::Result<()>>,
    T: Future<Output = ()>,
{
    let expired = async {
        shutdown_started.await;
        tokio::time::sleep(deadline).await;
    };

    tokio::select! {
        result = server => result,
        () = expired => {
            tracing::warn!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                timeout_secs = deadline.as_secs(),
                "Shutdown timeout elapsed, dropping remaining connections"
            );
            Ok(())
        }
    }
}
