//! Security middleware for HTTP requests.
//!
//! Applies CORS rules, a request body size limit and response headers that
//! stop browsers from sniffing JSON bodies as other content types.

mod cors;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header::{self, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

pub use cors::CorsConfig;
pub(crate) use cors::create_cors_layer;

/// Maximum accepted request body size in bytes.
///
/// Every request body is a small JSON document.
pub const DEFAULT_MAX_BODY_SIZE: usize = 64 * 1024;

/// Extension trait for `axum::`[`Router`] to apply security middleware.
pub trait RouterSecurityExt<S> {
    /// Layers CORS, the body size limit and security response headers.
    fn with_security(self, cors: &CorsConfig) -> Self;

    /// Layers security middlewares with development CORS defaults.
    fn with_default_security(self) -> Self;
}

impl<S> RouterSecurityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_security(self, cors: &CorsConfig) -> Self {
        self.layer(DefaultBodyLimit::max(DEFAULT_MAX_BODY_SIZE))
            .layer(create_cors_layer(cors))
            .layer(SetResponseHeaderLayer::overriding(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
    }

    fn with_default_security(self) -> Self {
        self.with_security(&CorsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use axum::routing::post;
    use axum_test::TestServer;

    use super::*;

    #[tokio::test]
    async fn nosniff_header_and_body_limit() -> anyhow::Result<()> {
        let app: Router = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .with_default_security();
        let server = TestServer::new(app)?;

        let response = server.post("/echo").text("hello").await;
        response.assert_status_ok();
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS),
            Some(&HeaderValue::from_static("nosniff"))
        );

        let response = server
            .post("/echo")
            .text("x".repeat(DEFAULT_MAX_BODY_SIZE + 1))
            .await;
        response.assert_status(axum::http::StatusCode::PAYLOAD_TOO_LARGE);
        Ok(())
    }
}
