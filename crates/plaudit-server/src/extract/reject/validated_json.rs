//! Validated JSON extractor with automatic validation.
//!
//! This module provides [`ValidateJson`], an enhanced JSON extractor that
//! combines deserialization with automatic validation using the `validator` crate.

use std::borrow::Cow;
use std::collections::HashMap;

use axum::extract::{FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use super::Json;
use crate::extract::TRACING_TARGET_EXTRACT;
use crate::handler::{Error, ErrorKind};

/// JSON extractor that runs `validator` checks after deserialization.
///
/// Also see [`Json`].
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    /// Creates a new instance of [`ValidateJson`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;
        data.validate()?;
        Ok(Self::new(data))
    }
}

/// Key under which `validator` reports struct-level (`schema`) errors.
const STRUCT_LEVEL_FIELD: &str = "__all__";

type ErrorParams = HashMap<Cow<'static, str>, serde_json::Value>;

/// Formats length validation errors.
fn format_length_error(field: &str, params: &ErrorParams) -> String {
    match (number_param(params, "min"), number_param(params, "max")) {
        (Some(min), Some(max)) => format!(
            "Field '{}' must be between {} and {} characters long",
            field, min, max
        ),
        (Some(min), None) => format!("Field '{}' must be at least {} characters long", field, min),
        (None, Some(max)) => format!("Field '{}' must be at most {} characters long", field, max),
        (None, None) => format!("Field '{}' has invalid length", field),
    }
}

/// Formats range validation errors.
fn format_range_error(field: &str, params: &ErrorParams) -> String {
    match (number_param(params, "min"), number_param(params, "max")) {
        (Some(min), Some(max)) => format!("Field '{}' must be between {} and {}", field, min, max),
        (Some(min), None) => format!("Field '{}' must be at least {}", field, min),
        (None, Some(max)) => format!("Field '{}' must be at most {}", field, max),
        (None, None) => format!("Field '{}' is out of valid range", field),
    }
}

fn number_param(params: &ErrorParams, key: &str) -> Option<serde_json::Number> {
    match params.get(key) {
        Some(serde_json::Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

/// Formats a single validation error into a user-facing sentence.
fn format_validation_error(field: &str, error: &ValidationError) -> String {
    match (&error.message, field) {
        (Some(custom_message), STRUCT_LEVEL_FIELD) => return custom_message.to_string(),
        (Some(custom_message), _) => return format!("Field '{}': {}", field, custom_message),
        (None, _) => {}
    }

    match error.code.as_ref() {
        "required" => format!("Field '{}' is required and cannot be empty", field),
        "length" => format_length_error(field, &error.params),
        "range" => format_range_error(field, &error.params),
        "url" => format!("Field '{}' must be a valid URL (e.g., https://example.com)", field),
        code => format!("Field '{}' failed validation: {}", field, code),
    }
}

impl From<ValidationErrors> for Error<'static> {
    fn from(errors: ValidationErrors) -> Self {
        let mut error_messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors
                    .iter()
                    .map(move |error| format_validation_error(field, error))
            })
            .collect();
        error_messages.sort();

        let user_message = match error_messages.as_slice() {
            [] => "Validation failed".to_string(),
            [single_error] => single_error.clone(),
            multiple => multiple.join(". "),
        };

        tracing::warn!(
            target: TRACING_TARGET_EXTRACT,
            errors = ?errors.field_errors(),
            "request validation failed"
        );

        ErrorKind::BadRequest
            .with_message(user_message)
            .with_resource("request")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn error_with(
        code: &'static str,
        params: &[(&'static str, serde_json::Value)],
    ) -> ValidationError {
        let mut error = ValidationError::new(code);
        for (key, value) in params {
            error.add_param(Cow::Borrowed(*key), value);
        }
        error
    }

    #[test]
    fn range_messages() {
        let error = error_with("range", &[("min", json!(1)), ("max", json!(4))]);
        assert_eq!(
            format_validation_error("columns", &error),
            "Field 'columns' must be between 1 and 4"
        );
    }

    #[test]
    fn length_messages() {
        let error = error_with("length", &[("min", json!(1))]);
        assert_eq!(
            format_validation_error("projectId", &error),
            "Field 'projectId' must be at least 1 characters long"
        );
    }

    #[test]
    fn custom_message_wins() {
        let error = ValidationError::new("columns").with_message(Cow::Borrowed("must be 1..=4"));
        assert_eq!(
            format_validation_error("config", &error),
            "Field 'config': must be 1..=4"
        );
    }

    #[test]
    fn struct_level_message_is_unprefixed() {
        let error = ValidationError::new("columns")
            .with_message(Cow::Borrowed("grid columns must be between 1 and 4"));
        assert_eq!(
            format_validation_error(STRUCT_LEVEL_FIELD, &error),
            "grid columns must be between 1 and 4"
        );
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn errors_become_bad_request() {
        let errors = Sample {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let error = Error::from(errors);
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.resource(), Some("request"));
        assert_eq!(
            error.message(),
            Some("Field 'name' must be at least 1 characters long")
        );
    }
}
