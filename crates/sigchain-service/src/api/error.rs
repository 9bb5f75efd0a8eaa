//! API error types and responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::service::ServiceError;

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Device not found")]
    DeviceNotFound,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Request cancelled")]
    Cancelled,
}

/// API error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            // Downstream clients match on this exact string.
            ApiError::DeviceNotFound => {
                (StatusCode::NOT_FOUND, "Device not found".to_string())
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::Cancelled => (
                // 499: client closed the request before the device lock was
                // acquired.
                StatusCode::from_u16(499).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "Request cancelled".to_string(),
            ),
        };

        let body = ErrorResponse {
            errors: vec![message],
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::DeviceNotFound => ApiError::DeviceNotFound,
            ServiceError::Cancelled => ApiError::Cancelled,
            ServiceError::Crypto(err) => ApiError::Internal(err.to_string()),
            ServiceError::Repository(msg) => {
                ApiError::Internal(format!("repository failure: {msg}"))
            }
        }
    }
}
