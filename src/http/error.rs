//! Mapping of failures to HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::RegistryError;

/// JSON body returned with every error status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Any failure a product handler can report.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path id was not an unsigned integer.
    #[error("invalid product id '{0}'")]
    InvalidId(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Request body could not be decoded.
    #[error("invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("registry unavailable")]
    Poisoned,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::Registry(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Registry(RegistryError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Body(rejection) => {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    StatusCode::PAYLOAD_TOO_LARGE
                } else {
                    StatusCode::BAD_REQUEST
                }
            }
            ApiError::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, "{}", message);
        } else if status == StatusCode::NOT_FOUND {
            tracing::debug!(status = %status, "{}", message);
        } else {
            tracing::warn!(status = %status, "{}", message);
        }

        (status, Json(ErrorBody { message })).into_response()
    }
}
