//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust
//! use plaudit_server::handler::routes;
//! use plaudit_server::service::{ServiceConfig, ServiceState};
//!
//! # fn example() -> anyhow::Result<()> {
//! let state = ServiceState::from_config(&ServiceConfig::default())?;
//! let app: axum::Router = routes().with_state(state);
//! # Ok(())
//! # }
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod embed;
mod error;
mod media;
mod monitors;
mod permissions;
pub mod request;
pub mod response;

use axum::Router;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with all routes and the JSON `404` fallback.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .merge(embed::routes())
        .merge(permissions::routes())
        .merge(media::routes())
        .merge(monitors::routes())
        .fallback(handler)
}
