use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

/// Body message for database failures; driver details stay in the logs
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Rejection raised by the upload gate; the message is returned verbatim
    #[error("Upload rejected: {0}")]
    Upload(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Upload(_) | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                SERVER_ERROR_MESSAGE.to_string()
            }
            AppError::NotFound(msg) | AppError::Validation(msg) => msg,
            AppError::Upload(msg) => {
                tracing::debug!("Upload rejected: {}", msg);
                msg
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                msg
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
