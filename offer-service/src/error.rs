use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const UNIDENTIFIED_ERROR: &str = "Unidentified error";

#[derive(Error, Debug)]
pub enum AppError {
    /// Field validation failed; carries the joined rule messages.
    #[error("{0}")]
    InvalidOffer(String),

    /// No matching record. An empty result, not a failure.
    #[error("{0}")]
    NotFound(String),

    /// The store failed underneath an operation.
    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    Internal(String),
}

/// Wire shape of every error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or_default().to_string(),
            message: if message.is_empty() {
                UNIDENTIFIED_ERROR.to_string()
            } else {
                message
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NO_CONTENT,
            AppError::InvalidOffer(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // A 204 must not carry a payload; every other outcome gets the
        // error body.
        if status == StatusCode::NO_CONTENT {
            return status.into_response();
        }

        let body = Json(ErrorResponse::new(status, self.to_string()));

        (status, body).into_response()
    }
}
