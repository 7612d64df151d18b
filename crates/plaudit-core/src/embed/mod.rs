//! The public embed widget contract.
//!
//! A widget is described entirely by its URL query string, so the same
//! parameters travel from the embed generator into the iframe `src` and back
//! out on the rendering page:
//!
//! | key          | values               | default    | applies to |
//! |--------------|----------------------|------------|------------|
//! | `project`    | project id           | (required) | all        |
//! | `type`       | `carousel` \| `grid` | `carousel` | all        |
//! | `status`     | `approved`           | forced     | all        |
//! | `autoplay`   | `true` \| `false`    | `false`    | carousel   |
//! | `navigation` | `true` \| `false`    | `true`     | carousel   |
//! | `columns`    | `1..=4`              | `3`        | grid       |
//! | `theme`      | `light` \| `dark`    | `light`    | all        |
//! | `limit`      | `all` \| count       | `all`      | all        |
//!
//! [`encode`] writes the string, [`decode`] reads it back with the defaults
//! above, and [`EmbedUrlBuilder`] turns it into a shareable iframe snippet.

mod codec;
mod config;
mod layout;
mod limit;
mod render;
mod snippet;

pub use codec::{APPROVED_STATUS, decode, encode};
pub use config::{DEFAULT_COLUMNS, EmbedConfig, EmbedParams};
pub use layout::{Layout, Theme};
pub use limit::ItemLimit;
pub use render::effective_columns;
pub use snippet::{EmbedSnippet, EmbedUrlBuilder, iframe_snippet};
