use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, OptionalFromRequestParts, Query as AxumQuery};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::extract::TRACING_TARGET_EXTRACT;
use crate::handler::{Error, ErrorKind};

/// Enhanced query parameter extractor with improved error handling.
///
/// Unlike the default axum extractor, a failed parse names the missing or
/// malformed parameter in the error body.
///
/// # Examples
///
/// ```rust,no_run
/// use plaudit_server::extract::Query;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct MediaParams {
///     url: String,
/// }
///
/// // Route: /media/youtube?url=https://youtu.be/dQw4w9WgXcQ
/// async fn youtube(Query(params): Query<MediaParams>) -> String {
///     params.url
/// }
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    /// Creates a new [`Query`] wrapper around the provided query parameters.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Consumes the wrapper and returns the inner query parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(query)) => Ok(Query(query)),
            Err(rejection) => Err(enhance_query_error(rejection)),
        }
    }
}

impl<T, S> OptionalFromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(query)) => Ok(Some(Query(query))),
            Err(_) => Ok(None),
        }
    }
}

/// Converts an axum query rejection into a descriptive [`Error`].
fn enhance_query_error(rejection: QueryRejection) -> Error<'static> {
    tracing::debug!(
        target: TRACING_TARGET_EXTRACT,
        error = %rejection,
        "query parameter parsing failed"
    );

    match rejection {
        QueryRejection::FailedToDeserializeQueryString(err) => {
            let error_message = err.body_text();

            if error_message.contains("missing field") {
                let field_name = extract_field_name_from_error(&error_message);
                ErrorKind::MissingParameter
                    .with_message("Missing required query parameter")
                    .with_context(format!(
                        "The query parameter '{}' is required but was not provided",
                        field_name.unwrap_or("unknown")
                    ))
            } else if error_message.contains("invalid") {
                ErrorKind::BadRequest
                    .with_message("Invalid query parameter type")
                    .with_context(format!("Failed to parse query parameter: {}", error_message))
            } else {
                ErrorKind::BadRequest
                    .with_message("Invalid query parameters")
                    .with_context(format!("Failed to parse query string: {}", error_message))
            }
        }
        _ => ErrorKind::BadRequest
            .with_message("Invalid query parameters")
            .with_context("The query string could not be parsed"),
    }
}

/// Extracts the backtick-quoted field name from a serde error message.
fn extract_field_name_from_error(error_message: &str) -> Option<&str> {
    let start = error_message.find('`')?;
    let end = error_message[start + 1..].find('`')?;
    Some(&error_message[start + 1..start + 1 + end])
}
