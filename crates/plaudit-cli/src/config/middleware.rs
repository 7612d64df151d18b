//! HTTP middleware configuration.

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use plaudit_server::middleware::{CorsConfig, RecoveryConfig};
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Upper bound for the per-request timeout, in seconds.
const MAX_REQUEST_TIMEOUT: u64 = 300;

/// Configuration for the router's middleware stack.
#[derive(Debug, Default, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Cross-origin request policy.
    #[clap(flatten)]
    pub cors: CorsConfig,

    /// Panic and timeout recovery.
    #[clap(flatten)]
    pub recovery: RecoveryConfig,
}

impl MiddlewareConfig {
    /// Validates middleware values.
    ///
    /// # Errors
    ///
    /// Returns an error if the request timeout is outside 1-300 seconds.
    pub fn validate(&self) -> AnyhowResult<()> {
        let timeout = self.recovery.request_timeout;
        if timeout == 0 || timeout > MAX_REQUEST_TIMEOUT {
            return Err(anyhow!(
                "Request timeout {timeout} seconds is invalid. Must be between 1 and {MAX_REQUEST_TIMEOUT} seconds."
            ));
        }

        Ok(())
    }

    /// Logs middleware configuration.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            cors_origins = ?self.cors.allowed_origins,
            cors_max_age = self.cors.max_age_seconds,
            cors_credentials = self.cors.allow_credentials,
            "CORS configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            request_timeout_secs = self.recovery.request_timeout,
            "Recovery configuration"
        );
    }
}
