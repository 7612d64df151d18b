//! Mapping of [`plaudit_core::Error`] onto HTTP errors.

use plaudit_core::ErrorKind as CoreErrorKind;

use super::{Error, ErrorKind};

/// Tracing target for core error conversion.
const TRACING_TARGET: &str = "plaudit_server::handler::error";

impl From<plaudit_core::Error> for Error<'static> {
    fn from(error: plaudit_core::Error) -> Self {
        match error.kind() {
            CoreErrorKind::MissingParameter => {
                ErrorKind::MissingParameter.with_message(client_message(&error))
            }
            CoreErrorKind::InvalidInput => ErrorKind::BadRequest.with_message(client_message(&error)),
            CoreErrorKind::Configuration => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    "server misconfiguration surfaced in a request"
                );

                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

fn client_message(error: &plaudit_core::Error) -> String {
    error.message().unwrap_or(error.kind_str()).to_owned()
}
