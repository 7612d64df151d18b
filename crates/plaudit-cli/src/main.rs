#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use plaudit_server::handler::routes;
use plaudit_server::middleware::{RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt};
use plaudit_server::service::ServiceState;

use crate::config::{Cli, MiddlewareConfig};

/// Tracing target for server startup events.
pub const TRACING_TARGET_SERVER_STARTUP: &str = "plaudit_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "plaudit_cli::server::shutdown";

/// Tracing target for configuration events.
pub const TRACING_TARGET_CONFIG: &str = "plaudit_cli::config";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            error = %error,
            "Server terminated with error"
        );
        eprintln!("Error: {error:#}");
        process::exit(1);
    }
}

/// Parses configuration, builds the application and serves it.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();
    Cli::init_tracing();

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "Starting plaudit server"
    );

    cli.log();
    cli.validate().context("invalid configuration")?;

    let state = ServiceState::from_config(&cli.service)
        .context("failed to initialize application state")?;
    let router = create_router(state, &cli.middleware);

    server::serve(router, &cli.server)
        .await
        .context("server stopped unexpectedly")?;

    Ok(())
}

/// Creates the application router with the middleware stack applied.
fn create_router(state: ServiceState, middleware: &MiddlewareConfig) -> Router {
    routes()
        .with_state(state)
        .with_security(&middleware.cors)
        .with_observability()
        .with_recovery(&middleware.recovery)
}
