//! Error responses for route handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::activity::ActivityError;
use crate::source::SourceError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0} not found")]
    NotFound(String),
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<SourceError> for ApiError {
    fn from(err: SourceError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };
        tracing::debug!(%status, error = %self, "Request rejected");

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
