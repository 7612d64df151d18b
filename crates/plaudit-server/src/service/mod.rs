//! Application state and dependency injection.

mod config;

use plaudit_core::embed::EmbedUrlBuilder;

pub use crate::service::config::ServiceConfig;
pub use crate::{Error, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    pub embed_urls: EmbedUrlBuilder,
}

impl ServiceState {
    /// Initializes application state from configuration.
    pub fn from_config(service_config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            embed_urls: service_config.embed_url_builder()?,
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(embed_urls: EmbedUrlBuilder);
