//! YouTube link parsing for video testimonials.

use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Length of every YouTube video id.
pub const VIDEO_ID_LEN: usize = 11;

static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:youtu\.be/|youtube(?:-nocookie)?\.com/(?:embed/|v/|shorts/|live/|watch\?(?:[^#]*&)?v=))([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
    )
    .expect("video id pattern is valid")
});

/// Extracts the 11-character video id from a YouTube link.
///
/// Recognizes `youtu.be/<id>`, `/embed/<id>`, `/v/<id>`, `/shorts/<id>`,
/// `/live/<id>` and `watch?...v=<id>` forms, with or without scheme and `www.`.
/// Returns `None` for anything else, including ids of the wrong length.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERN
        .captures(url.trim())
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_owned())
}

/// Returns the privacy-friendly player URL for a video id.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

/// Returns the high-quality thumbnail URL for a video id.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

/// A recognized YouTube video with its derived player and thumbnail URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct VideoLink {
    /// The 11-character video id.
    pub video_id: String,
    /// Player URL suitable for an iframe.
    pub embed_url: String,
    /// High-quality thumbnail image.
    pub thumbnail_url: String,
}

impl VideoLink {
    /// Parses a YouTube link.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInput`] error when no video id can be extracted.
    ///
    /// [`InvalidInput`]: crate::ErrorKind::InvalidInput
    pub fn parse(url: &str) -> Result<Self> {
        let video_id = extract_video_id(url).ok_or_else(|| {
            Error::invalid_input()
                .with_message(format!("'{}' is not a youtube video link", url.trim()))
        })?;

        Ok(Self {
            embed_url: embed_url(&video_id),
            thumbnail_url: thumbnail_url(&video_id),
            video_id,
        })
    }
}
