//! Monitor response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// System monitoring status response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonitorStatus {
    /// Overall system health status.
    pub is_healthy: bool,
    /// Application version.
    pub version: String,
}

impl Default for MonitorStatus {
    fn default() -> Self {
        Self {
            is_healthy: true,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
