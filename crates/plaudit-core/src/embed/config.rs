//! Widget configuration values.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ItemLimit, Layout, Theme, effective_columns};
use crate::Result;

/// Grid column count used when none (or a malformed one) is given.
pub const DEFAULT_COLUMNS: u8 = 3;

/// Rendering options of an embed widget.
///
/// `autoplay` and `show_navigation` only affect carousels; `columns` only
/// affects grids. All fields are kept regardless of layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedConfig {
    /// Carousel advances on its own.
    pub autoplay: bool,
    /// Carousel shows previous/next controls.
    pub show_navigation: bool,
    /// Grid column count, `1..=4` when produced by the configuration UI.
    pub columns: u8,
    /// Color theme.
    pub theme: Theme,
    /// Maximum number of testimonials.
    pub limit: ItemLimit,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            show_navigation: true,
            columns: DEFAULT_COLUMNS,
            theme: Theme::default(),
            limit: ItemLimit::default(),
        }
    }
}

impl EmbedConfig {
    /// Returns a copy with the fields that do not apply to `layout` reset to
    /// their defaults.
    ///
    /// This is exactly what survives an [`encode`](super::encode) /
    /// [`decode`](super::decode) round trip.
    pub fn normalized_for(self, layout: Layout) -> Self {
        let defaults = Self::default();
        match layout {
            Layout::Carousel => Self {
                columns: defaults.columns,
                ..self
            },
            Layout::Grid => Self {
                autoplay: defaults.autoplay,
                show_navigation: defaults.show_navigation,
                ..self
            },
        }
    }
}

/// A fully decoded embed request: which project, which layout, which options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct EmbedParams {
    /// Project whose approved testimonials are shown.
    pub project_id: String,
    /// Widget layout.
    pub layout: Layout,
    /// Rendering options.
    #[serde(flatten)]
    pub config: EmbedConfig,
}

impl EmbedParams {
    /// Creates embed parameters.
    pub fn new(project_id: impl Into<String>, layout: Layout, config: EmbedConfig) -> Self {
        Self {
            project_id: project_id.into(),
            layout,
            config,
        }
    }

    /// Parses a widget query string.
    ///
    /// See [`decode`](super::decode).
    pub fn from_query_str(query: &str) -> Result<Self> {
        super::decode(query)
    }

    /// Serializes to a widget query string.
    ///
    /// See [`encode`](super::encode).
    pub fn to_query_string(&self) -> String {
        super::encode(&self.project_id, self.layout, &self.config)
    }

    /// Returns the number of grid columns to render for `item_count` items.
    #[inline]
    pub fn grid_columns(&self, item_count: usize) -> usize {
        effective_columns(self.config.columns, item_count)
    }

    /// Returns how many of `item_count` approved testimonials are shown.
    #[inline]
    pub fn visible_items(&self, item_count: usize) -> usize {
        self.config.limit.apply(item_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EmbedConfig::default();
        assert!(!config.autoplay);
        assert!(config.show_navigation);
        assert_eq!(config.columns, 3);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.limit, ItemLimit::All);
    }

    #[test]
    fn normalization_resets_foreign_fields() {
        let config = EmbedConfig {
            autoplay: true,
            show_navigation: false,
            columns: 2,
            theme: Theme::Dark,
            limit: ItemLimit::count(6),
        };

        let carousel = config.normalized_for(Layout::Carousel);
        assert!(carousel.autoplay);
        assert!(!carousel.show_navigation);
        assert_eq!(carousel.columns, DEFAULT_COLUMNS);

        let grid = config.normalized_for(Layout::Grid);
        assert!(!grid.autoplay);
        assert!(grid.show_navigation);
        assert_eq!(grid.columns, 2);
        assert_eq!(grid.theme, Theme::Dark);
        assert_eq!(grid.limit, ItemLimit::count(6));
    }

    #[test]
    fn json_shape_is_flat_camel_case() {
        let params = EmbedParams::new("p1", Layout::Grid, EmbedConfig::default());
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["projectId"], "p1");
        assert_eq!(value["layout"], "grid");
        assert_eq!(value["showNavigation"], true);
        assert_eq!(value["limit"], "all");
    }

    #[test]
    fn partial_config_json_uses_defaults() {
        let config: EmbedConfig = serde_json::from_str(r#"{"columns":4}"#).unwrap();
        assert_eq!(config.columns, 4);
        assert!(config.show_navigation);
        assert_eq!(config.limit, ItemLimit::All);
    }
}
