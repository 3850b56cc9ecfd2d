use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::pdf::PdfError;
use crate::llm_client::LlmError;

/// Application-level error type.
///
/// Handlers fold every variant into a 200 error or fallback body via
/// `client_message()`; it never becomes an HTTP status on its own.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message used in the 200-status error and fallback bodies.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Llm(e) => e.to_string(),
            AppError::Pdf(e) => e.to_string(),
            AppError::Internal(e) => e.to_string(),
        }
    }
}

/// A JSON body that could not be extracted: malformed, missing fields,
/// wrong content type, or over the body limit. Keeps axum's status.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RequestError {
    pub status: StatusCode,
    pub message: String,
}

impl From<JsonRejection> for RequestError {
    fn from(rejection: JsonRejection) -> Self {
        RequestError {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let code = match self.status {
            StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
            StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
            _ => "VALIDATION_ERROR",
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.message
            }
        }));

        (self.status, body).into_response()
    }
}
