//! Query-string encoding and decoding of embed parameters.

use std::borrow::Cow;

use url::form_urlencoded;

use super::{DEFAULT_COLUMNS, EmbedConfig, EmbedParams, ItemLimit, Layout, Theme};
use crate::{Error, Result, TRACING_TARGET_EMBED};

/// The only testimonial status embeds ever request.
pub const APPROVED_STATUS: &str = "approved";

/// Encodes embed parameters as a URL query string (without the leading `?`).
///
/// Keys are written in a fixed order: `project`, `type`, `status`, then
/// `autoplay` and `navigation` for carousels or `columns` for grids, then
/// `theme` and `limit`. Options that do not apply to `layout` are omitted.
pub fn encode(project_id: &str, layout: Layout, config: &EmbedConfig) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer
        .append_pair("project", project_id)
        .append_pair("type", layout.as_ref())
        .append_pair("status", APPROVED_STATUS);

    match layout {
        Layout::Carousel => {
            serializer
                .append_pair("autoplay", bool_literal(config.autoplay))
                .append_pair("navigation", bool_literal(config.show_navigation));
        }
        Layout::Grid => {
            serializer.append_pair("columns", &config.columns.to_string());
        }
    }

    serializer
        .append_pair("theme", config.theme.as_ref())
        .append_pair("limit", &config.limit.to_string())
        .finish()
}

/// Decodes a widget query string, with or without the leading `?`.
///
/// Every parameter except `project` falls back to its default when absent or
/// malformed. When a key repeats, the first occurrence wins. A client-supplied
/// `status` is ignored.
///
/// # Errors
///
/// Returns a [`MissingParameter`] error when `project` is absent or empty.
///
/// [`MissingParameter`]: crate::ErrorKind::MissingParameter
pub fn decode(query: &str) -> Result<EmbedParams> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let fields = QueryFields::parse(query);

    let Some(project_id) = fields.project.filter(|project| !project.is_empty()) else {
        tracing::debug!(
            target: TRACING_TARGET_EMBED,
            "embed query without project id"
        );
        return Err(Error::missing_parameter().with_message("no project id provided"));
    };

    let layout = fields
        .layout
        .as_deref()
        .map_or_else(Layout::default, Layout::parse_or_default);

    let columns = match fields.columns.as_deref() {
        None => DEFAULT_COLUMNS,
        Some(raw) => parse_columns(raw).unwrap_or_else(|| {
            tracing::debug!(
                target: TRACING_TARGET_EMBED,
                columns = raw,
                "malformed column count, using default"
            );
            DEFAULT_COLUMNS
        }),
    };

    let config = EmbedConfig {
        autoplay: fields.autoplay.as_deref() == Some("true"),
        show_navigation: fields.navigation.as_deref() != Some("false"),
        columns,
        theme: fields
            .theme
            .as_deref()
            .map_or_else(Theme::default, Theme::parse_or_default),
        limit: fields
            .limit
            .as_deref()
            .map_or_else(ItemLimit::default, ItemLimit::parse),
    };

    Ok(EmbedParams {
        project_id: project_id.into_owned(),
        layout,
        config,
    })
}

#[inline]
const fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Column counts must be positive and fit in a `u8`.
fn parse_columns(raw: &str) -> Option<u8> {
    raw.trim().parse::<u8>().ok().filter(|columns| *columns > 0)
}

/// The recognized keys of a widget query, first occurrence only.
#[derive(Default)]
struct QueryFields<'a> {
    project: Option<Cow<'a, str>>,
    layout: Option<Cow<'a, str>>,
    autoplay: Option<Cow<'a, str>>,
    navigation: Option<Cow<'a, str>>,
    columns: Option<Cow<'a, str>>,
    theme: Option<Cow<'a, str>>,
    limit: Option<Cow<'a, str>>,
}

impl<'a> QueryFields<'a> {
    fn parse(query: &'a str) -> Self {
        let mut fields = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "project" => &mut fields.project,
                "type" => &mut fields.layout,
                "autoplay" => &mut fields.autoplay,
                "navigation" => &mut fields.navigation,
                "columns" => &mut fields.columns,
                "theme" => &mut fields.theme,
                "limit" => &mut fields.limit,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value);
            }
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::ErrorKind;

    fn sample_config() -> EmbedConfig {
        EmbedConfig {
            autoplay: true,
            show_navigation: false,
            columns: 2,
            theme: Theme::Dark,
            limit: ItemLimit::parse("10"),
        }
    }

    #[test]
    fn encode_carousel() {
        let query = encode("p1", Layout::Carousel, &sample_config());
        assert_eq!(
            query,
            "project=p1&type=carousel&status=approved&autoplay=true&navigation=false&theme=dark&limit=10"
        );
    }

    #[test]
    fn encode_grid() {
        let query = encode("p1", Layout::Grid, &sample_config());
        assert_eq!(
            query,
            "project=p1&type=grid&status=approved&columns=2&theme=dark&limit=10"
        );
    }

    #[test]
    fn encode_escapes_project_id() {
        let query = encode("a b&c=d", Layout::Grid, &EmbedConfig::default());
        assert!(query.starts_with("project=a+b%26c%3Dd&"));

        let decoded = decode(&query).unwrap();
        assert_eq!(decoded.project_id, "a b&c=d");
    }

    #[test]
    fn round_trip_on_applicable_fields() {
        for layout in Layout::iter() {
            let config = sample_config();
            let decoded = decode(&encode("p1", layout, &config)).unwrap();

            assert_eq!(decoded.project_id, "p1");
            assert_eq!(decoded.layout, layout);
            assert_eq!(decoded.config, config.normalized_for(layout));
            assert_eq!(decoded.config.theme, Theme::Dark);
            assert_eq!(decoded.config.limit.to_string(), "10");
        }
    }

    #[test]
    fn decode_grid_query() {
        let params = decode("type=grid&columns=4&theme=dark&limit=5&project=p1").unwrap();
        assert_eq!(params.project_id, "p1");
        assert_eq!(params.layout, Layout::Grid);
        assert_eq!(params.config.columns, 4);
        assert_eq!(params.config.theme, Theme::Dark);
        assert_eq!(params.config.limit.to_string(), "5");
    }

    #[test]
    fn decode_project_only_uses_defaults() {
        let params = decode("project=p1").unwrap();
        assert_eq!(params.project_id, "p1");
        assert_eq!(params.layout, Layout::Carousel);
        assert!(!params.config.autoplay);
        assert!(params.config.show_navigation);
        assert_eq!(params.config.theme, Theme::Light);
        assert_eq!(params.config.limit, ItemLimit::All);
        assert_eq!(params.config.columns, DEFAULT_COLUMNS);
    }

    #[test]
    fn decode_accepts_leading_question_mark() {
        let params = decode("?project=p9&type=grid").unwrap();
        assert_eq!(params.project_id, "p9");
        assert_eq!(params.layout, Layout::Grid);
    }

    #[test]
    fn decode_without_project_is_an_error() {
        for query in ["", "?", "type=grid", "project=", "project=&type=grid"] {
            let error = decode(query).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::MissingParameter, "query {query:?}");
            assert_eq!(error.message(), Some("no project id provided"));
        }
    }

    #[test]
    fn navigation_hidden_only_by_literal_false() {
        assert!(decode("project=p&navigation=true").unwrap().config.show_navigation);
        assert!(decode("project=p&navigation=0").unwrap().config.show_navigation);
        assert!(decode("project=p&navigation=FALSE").unwrap().config.show_navigation);
        assert!(!decode("project=p&navigation=false").unwrap().config.show_navigation);
    }

    #[test]
    fn autoplay_enabled_only_by_literal_true() {
        assert!(decode("project=p&autoplay=true").unwrap().config.autoplay);
        assert!(!decode("project=p&autoplay=1").unwrap().config.autoplay);
        assert!(!decode("project=p&autoplay=yes").unwrap().config.autoplay);
    }

    #[test]
    fn malformed_numbers_fall_back() {
        let params = decode("project=p&columns=abc&limit=-2").unwrap();
        assert_eq!(params.config.columns, DEFAULT_COLUMNS);
        assert_eq!(params.config.limit, ItemLimit::All);

        let params = decode("project=p&columns=0&limit=0").unwrap();
        assert_eq!(params.config.columns, DEFAULT_COLUMNS);
        assert_eq!(params.config.limit, ItemLimit::All);
    }

    #[test]
    fn decoder_does_not_clamp_columns() {
        let params = decode("project=p&type=grid&columns=9").unwrap();
        assert_eq!(params.config.columns, 9);
    }

    #[test]
    fn unknown_enums_fall_back() {
        let params = decode("project=p&type=masonry&theme=sepia").unwrap();
        assert_eq!(params.layout, Layout::Carousel);
        assert_eq!(params.config.theme, Theme::Light);
    }

    #[test]
    fn first_occurrence_wins_and_status_is_ignored() {
        let params = decode("project=a&project=b&status=pending&theme=dark&theme=light").unwrap();
        assert_eq!(params.project_id, "a");
        assert_eq!(params.config.theme, Theme::Dark);
        assert!(params.to_query_string().contains("status=approved"));
    }
}
