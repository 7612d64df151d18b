//! Enhanced HTTP request extractors with improved error handling and validation.
//!
//! Drop-in replacements for the standard axum extractors whose rejections
//! are converted into the server's JSON [`Error`] responses:
//!
//! - [`Json`]: JSON deserialization with descriptive error messages
//! - [`ValidateJson`]: JSON extraction followed by `validator` checks
//! - [`Path`]: path parameter extraction with detailed error context
//! - [`Query`]: query parameter extraction with field-level messages
//!
//! [`Error`]: crate::handler::Error

pub mod reject;

pub use crate::extract::reject::{Json, Path, Query, ValidateJson};

/// Tracing target for request extraction.
pub const TRACING_TARGET_EXTRACT: &str = "plaudit_server::extract";
