//! Error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use movie_core::MovieError;
use serde_json::json;

pub const MOVIES_NOT_FOUND: &str = "Movies not found";
pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// How the error body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorBody {
    /// `{"error": message}`
    Json,
    /// The message itself as `text/plain`.
    Text,
}

/// API error with status code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub(crate) body: ErrorBody,
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: msg.into(), body: ErrorBody::Json }
    }

    /// 400 carrying the decoder message verbatim.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: msg.into(), body: ErrorBody::Text }
    }

    /// Map a store error for the list and delete endpoints, which report an
    /// empty collection as "Movies not found".
    pub fn for_collection(err: MovieError) -> Self {
        match err {
            MovieError::EmptyCollection => Self::not_found(MOVIES_NOT_FOUND),
            other => Self::from(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.body {
            ErrorBody::Json => (self.status, Json(json!({ "error": self.message }))).into_response(),
            ErrorBody::Text => (self.status, self.message).into_response(),
        }
    }
}

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::EmptyCollection | MovieError::NotFound { .. } => {
                ApiError::not_found(MOVIE_NOT_FOUND)
            }
            MovieError::Decode(e) => ApiError::bad_request(e.to_string()),
        }
    }
}
