//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map any error to a logged internal server error.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error().brief(context)
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_500_maps_errors_to_internal_server_error() {
        let result: Result<(), &str> = Err("boom");

        let status = result.or_500("failed to read catalog").err();

        assert_eq!(
            status.as_ref().map(|error| error.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
        assert_eq!(
            status.map(|error| error.brief).as_deref(),
            Some("failed to read catalog")
        );
    }

    #[test]
    fn or_500_passes_values_through() {
        let result: Result<u8, &str> = Ok(7);

        assert_eq!(result.or_500("failed").ok(), Some(7));
    }
}
