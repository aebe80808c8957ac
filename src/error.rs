//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The client sent input that does not match the expected shape, e.g. a
    /// missing field, a field of the wrong type or a malformed UUID.
    ///
    /// The string describes which part of the input was rejected and is safe
    /// to show to the client.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The `sessionId` cookie is missing from the request, or its value is
    /// not a valid session ID.
    #[error("the request does not have a session")]
    SessionMissing,

    /// The requested route does not exist.
    ///
    /// A transaction that cannot be found is not an error, see
    /// [get_transaction](crate::transaction::get_transaction).
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::SessionMissing => (StatusCode::UNAUTHORIZED, "Unauthorized.".to_owned()),
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
