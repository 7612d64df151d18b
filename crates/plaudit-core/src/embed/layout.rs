//! Widget layout and color theme.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// How testimonials are arranged inside the widget.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    /// One testimonial at a time, optionally auto-advancing.
    #[default]
    Carousel,
    /// Several testimonials side by side in columns.
    Grid,
}

impl Layout {
    /// Returns the iframe height, in pixels, used by generated snippets.
    #[inline]
    pub const fn iframe_height(self) -> u16 {
        match self {
            Self::Carousel => 500,
            Self::Grid => 800,
        }
    }

    /// Parses a layout literal, falling back to [`Layout::Carousel`].
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Widget color theme.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Parses a theme literal, falling back to [`Theme::Light`].
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iframe_heights() {
        assert_eq!(Layout::Carousel.iframe_height(), 500);
        assert_eq!(Layout::Grid.iframe_height(), 800);
    }

    #[test]
    fn unknown_literals_use_defaults() {
        assert_eq!(Layout::parse_or_default("grid"), Layout::Grid);
        assert_eq!(Layout::parse_or_default("masonry"), Layout::Carousel);
        assert_eq!(Theme::parse_or_default("dark"), Theme::Dark);
        assert_eq!(Theme::parse_or_default("DARK"), Theme::Light);
    }

    #[test]
    fn wire_names_are_lowercase() {
        assert_eq!(Layout::Grid.as_ref(), "grid");
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(serde_json::to_string(&Layout::Carousel).unwrap(), "\"carousel\"");
    }
}
