//! API error type and HTTP status mapping.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::compositor::ComposeError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{status}: {message}")]
    Http { status: StatusCode, message: String },
    #[error("compositing error: {0}")]
    Compose(#[from] ComposeError),
    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Http { status, message } => (*status, message.clone()),
            ApiError::Compose(err) => match err {
                ComposeError::Decode(_) => {
                    (StatusCode::BAD_REQUEST, "uploaded file is not a valid image".to_string())
                }
                ComposeError::InvalidGeometry { width, height } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("resize produced invalid dimensions {}x{}", width, height),
                ),
                ComposeError::Encode(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to encode result".to_string(),
                ),
            },
            ApiError::Multipart(err) => match err.status() {
                StatusCode::PAYLOAD_TOO_LARGE => (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "upload exceeds size limit".to_string(),
                ),
                _ => (StatusCode::BAD_REQUEST, err.to_string()),
            },
            ApiError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage failure".to_string(),
            ),
        };
        let body = Json(ErrorBody { error: message });
        (status, body).into_response()
    }
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::Http {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn payload_too_large(msg: impl Into<String>) -> Self {
        Self::Http {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: msg.into(),
        }
    }
}
