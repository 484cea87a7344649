use crate::model::ErrorBody;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to HTTP callers. Scoring itself never fails; the only
/// error paths are a body that does not parse into a receipt and a lookup
/// of an unknown id.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid receipt payload")]
    InvalidJson,
    #[error("receipt not found")]
    ReceiptNotFound,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::ReceiptNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::InvalidJson => "Invalid JSON",
            ApiError::ReceiptNotFound => "Receipt not found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "rejecting receipt payload");
        ApiError::InvalidJson
    }
}
