//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::InvalidDateError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`InvalidDateError`] to `422 Unprocessable Entity`.
pub struct ApiError(InvalidDateError);

impl From<InvalidDateError> for ApiError {
    fn from(err: InvalidDateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.0, "rejecting request");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
