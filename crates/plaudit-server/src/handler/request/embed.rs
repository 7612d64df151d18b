//! Embed request types.

use plaudit_core::embed::{EmbedConfig, Layout};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use validator::{Validate, ValidationError};

/// Grid column counts the embed generator offers.
const COLUMNS_RANGE: std::ops::RangeInclusive<u8> = 1..=4;

/// Render-time hints accepted next to a widget query string.
#[must_use]
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbedRenderQuery {
    /// Number of approved testimonials available to the widget.
    pub items: Option<usize>,
}

impl EmbedRenderQuery {
    /// Reads the hints from a raw query string.
    ///
    /// Only the first `items` occurrence counts; a value that is not a
    /// non-negative integer is treated as absent.
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let items = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "items")
            .and_then(|(_, value)| value.trim().parse().ok());

        Self { items }
    }
}

/// Request payload for generating an embed snippet.
///
/// # Example
///
/// ```json
/// {
///   "projectId": "p1",
///   "layout": "grid",
///   "config": { "columns": 2, "theme": "dark", "limit": 6 }
/// }
/// ```
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_grid_columns"))]
pub struct CreateSnippet {
    /// Project whose approved testimonials are embedded.
    #[validate(length(min = 1))]
    pub project_id: String,

    /// Widget layout, `carousel` when omitted.
    #[serde(default)]
    pub layout: Layout,

    /// Rendering options; missing fields take their defaults.
    #[serde(default)]
    pub config: EmbedConfig,
}

/// Column counts only reach the embed URL for grids.
fn validate_grid_columns(request: &CreateSnippet) -> Result<(), ValidationError> {
    let columns = request.config.columns;
    if request.layout != Layout::Grid || COLUMNS_RANGE.contains(&columns) {
        return Ok(());
    }

    let mut error = ValidationError::new("columns")
        .with_message("grid columns must be between 1 and 4".into());
    error.add_param("columns".into(), &columns);
    Err(error)
}
