//! Shareable embed URLs and iframe snippets.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{EmbedConfig, Layout, encode};
use crate::{Error, Result, TRACING_TARGET_EMBED};

/// Path segment of the embed rendering page, relative to the public base URL.
const EMBED_PATH: &str = "embed";

/// Builds embed URLs and snippets against the app's public base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedUrlBuilder {
    base_url: Url,
}

/// Everything the embed generator shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct EmbedSnippet {
    /// Absolute URL of the embed page.
    pub url: String,
    /// The encoded query string alone.
    pub query: String,
    /// Ready-to-paste iframe markup.
    pub iframe: String,
    /// Iframe height in pixels.
    pub height: u16,
}

impl EmbedUrlBuilder {
    /// Creates a builder from an absolute `http`/`https` base URL.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`] error if the URL cannot be parsed or cannot
    /// carry a path.
    ///
    /// [`Configuration`]: crate::ErrorKind::Configuration
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|err| {
            Error::configuration()
                .with_message(format!("invalid public base url '{base_url}'"))
                .with_source(err)
        })?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::configuration()
                .with_message(format!("public base url '{base_url}' must be http(s)")));
        }

        Ok(Self { base_url })
    }

    /// Returns the configured base URL.
    #[inline]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the absolute embed page URL for the given widget.
    pub fn embed_url(&self, project_id: &str, layout: Layout, config: &EmbedConfig) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(EMBED_PATH);
        }

        url.set_query(Some(&encode(project_id, layout, config)));
        url.set_fragment(None);
        url
    }

    /// Returns the URL, query and iframe markup for the given widget.
    pub fn snippet(&self, project_id: &str, layout: Layout, config: &EmbedConfig) -> EmbedSnippet {
        let url = self.embed_url(project_id, layout, config);
        let query = url.query().unwrap_or_default().to_owned();

        tracing::debug!(
            target: TRACING_TARGET_EMBED,
            project_id,
            layout = %layout,
            "embed snippet generated"
        );

        EmbedSnippet {
            iframe: iframe_snippet(url.as_str(), layout),
            height: layout.iframe_height(),
            url: url.into(),
            query,
        }
    }
}

/// Returns the iframe markup embedding `src`.
///
/// Width is always `100%`; height is fixed per layout (see
/// [`Layout::iframe_height`]).
pub fn iframe_snippet(src: &str, layout: Layout) -> String {
    format!(
        r#"<iframe src="{}" width="100%" height="{}" frameborder="0"></iframe>"#,
        src.replace('"', "&quot;"),
        layout.iframe_height()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::embed::{EmbedParams, ItemLimit};

    #[test]
    fn rejects_invalid_base_urls() {
        for base in ["not a url", "mailto:team@example.com", "ftp://example.com"] {
            let error = EmbedUrlBuilder::new(base).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::Configuration, "base {base:?}");
        }
    }

    #[test]
    fn embed_url_appends_path_and_query() {
        let builder = EmbedUrlBuilder::new("https://app.example.com").unwrap();
        let url = builder.embed_url("p1", Layout::Grid, &EmbedConfig::default());
        assert_eq!(
            url.as_str(),
            "https://app.example.com/embed?project=p1&type=grid&status=approved&columns=3&theme=light&limit=all"
        );
    }

    #[test]
    fn embed_url_keeps_base_path() {
        let builder = EmbedUrlBuilder::new("https://example.com/testimonials/").unwrap();
        let url = builder.embed_url("p1", Layout::Carousel, &EmbedConfig::default());
        assert_eq!(url.path(), "/testimonials/embed");

        let builder = EmbedUrlBuilder::new("https://example.com/app?x=1#top").unwrap();
        let url = builder.embed_url("p1", Layout::Carousel, &EmbedConfig::default());
        assert_eq!(url.path(), "/app/embed");
        assert!(url.query().unwrap().starts_with("project=p1&"));
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn snippet_round_trips_through_decode() {
        let builder = EmbedUrlBuilder::new("http://localhost:3000").unwrap();
        let config = EmbedConfig {
            autoplay: true,
            limit: ItemLimit::count(5),
            ..EmbedConfig::default()
        };

        let snippet = builder.snippet("p1", Layout::Carousel, &config);
        assert_eq!(snippet.height, 500);

        let params = EmbedParams::from_query_str(&snippet.query).unwrap();
        assert_eq!(params.config, config.normalized_for(Layout::Carousel));
    }

    #[test]
    fn iframe_markup() {
        assert_eq!(
            iframe_snippet("https://x.test/embed?project=p1", Layout::Carousel),
            r#"<iframe src="https://x.test/embed?project=p1" width="100%" height="500" frameborder="0"></iframe>"#
        );
        assert!(iframe_snippet("https://x.test/embed", Layout::Grid).contains(r#"height="800""#));
    }
}
