//! Embed response types.

use plaudit_core::embed::EmbedParams;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Decoded widget parameters, as the rendering page sees them.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbedConfigResponse {
    /// Decoded parameters with defaults applied.
    #[serde(flatten)]
    pub params: EmbedParams,
    /// Grid columns actually rendered for the given item count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_columns: Option<usize>,
    /// Testimonials shown for the given item count after the limit applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_items: Option<usize>,
}

impl EmbedConfigResponse {
    /// Builds the response, resolving render counts when `items` is known.
    pub fn new(params: EmbedParams, items: Option<usize>) -> Self {
        Self {
            effective_columns: items.map(|items| params.grid_columns(items)),
            visible_items: items.map(|items| params.visible_items(items)),
            params,
        }
    }
}
