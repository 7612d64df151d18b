#[cfg(feature = "config")]
use clap::Args;
use plaudit_core::embed::EmbedUrlBuilder;
use serde::{Deserialize, Serialize};

use crate::service::Result;

/// Default values for configuration options.
mod defaults {
    /// Default public URL of the web app, used as the embed base.
    pub const PUBLIC_BASE_URL: &str = "http://localhost:3000";
}

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Public URL of the web app; embed URLs are generated under `<url>/embed`.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "PUBLIC_BASE_URL", default_value = defaults::PUBLIC_BASE_URL)
    )]
    pub public_base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            public_base_url: defaults::PUBLIC_BASE_URL.to_owned(),
        }
    }
}

impl ServiceConfig {
    /// Creates a configuration with the given public base URL.
    pub fn with_public_base_url(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
        }
    }

    /// Builds the embed URL builder for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is not an absolute
    /// `http(s)` URL.
    pub fn embed_url_builder(&self) -> Result<EmbedUrlBuilder> {
        Ok(EmbedUrlBuilder::new(&self.public_base_url)?)
    }
}
