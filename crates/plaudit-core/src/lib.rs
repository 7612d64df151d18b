#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for permission resolution.
pub const TRACING_TARGET_PERMISSION: &str = "plaudit_core::permission";

/// Tracing target for the embed query-string codec.
pub const TRACING_TARGET_EMBED: &str = "plaudit_core::embed";

mod error;

pub mod embed;
pub mod media;
pub mod permission;
pub mod prelude;

pub use error::{BoxedError, Error, ErrorKind, Result};
