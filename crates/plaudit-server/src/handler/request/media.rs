//! Media request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Query parameters for YouTube link inspection.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeQuery {
    /// The link pasted by the submitter.
    pub url: String,
}
