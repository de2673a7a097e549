//! HTTP error type for the artist routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::response::ErrorResponse;
use crate::ArtistError;

/// Error wrapper for converting artist errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub ArtistError);

impl ApiError {
    /// Status code and machine-readable type for the wrapped error
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            ArtistError::Validation(_)
            | ArtistError::InvalidId(_)
            | ArtistError::InvalidFilter(_)
            | ArtistError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "bad_data"),
            ArtistError::DuplicateName(_) => (StatusCode::CONFLICT, "conflict"),
            ArtistError::Io(_)
            | ArtistError::Storage(_)
            | ArtistError::Serialization(_)
            | ArtistError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.classify();

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, status = %status.as_u16(), "Request rejected");
        }

        let body = ErrorResponse::new(error_type, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

impl From<ArtistError> for ApiError {
    fn from(err: ArtistError) -> Self {
        ApiError(err)
    }
}
