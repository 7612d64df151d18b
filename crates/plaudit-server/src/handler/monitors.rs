//! System health monitoring handlers.

use axum::Router;
use axum::routing::get;

use super::response::MonitorStatus;
use crate::extract::Json;
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "plaudit_server::handler::monitors";

/// Reports that the server is up. The server holds no external connections,
/// so reaching the handler is the whole check.
#[tracing::instrument(skip_all)]
async fn health_status() -> Result<Json<MonitorStatus>> {
    let response = MonitorStatus::default();

    tracing::debug!(
        target: TRACING_TARGET,
        is_healthy = response.is_healthy,
        "health status requested"
    );

    Ok(Json(response))
}

/// Returns a [`Router`] with all health monitoring routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn health_status_endpoint() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes())?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let status = response.json::<MonitorStatus>();
        assert!(status.is_healthy);
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}
