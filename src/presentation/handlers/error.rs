use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::AudioTranscoderError;
use crate::application::services::{AnalysisError, FindingsParseError, NormalizeError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Client-visible failure of an analysis request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn internal(cause: impl std::fmt::Display) -> Self {
        ApiError::Internal(format!(
            "Internal error processing the audio with Gemini: {}",
            cause
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(format!("Uploaded file is too large: {}", e.body_text()))
        } else {
            ApiError::BadRequest(format!("Failed to read multipart: {}", e.body_text()))
        }
    }
}

impl From<NormalizeError> for ApiError {
    fn from(e: NormalizeError) -> Self {
        match e {
            NormalizeError::UnsupportedMediaType { .. } => ApiError::BadRequest(e.to_string()),
            NormalizeError::Transcoding(AudioTranscoderError::DecodingFailed(_)) => {
                ApiError::BadRequest(format!("The audio file could not be decoded: {}", e))
            }
            NormalizeError::EmptyOutput | NormalizeError::Transcoding(_) => ApiError::internal(e),
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        ApiError::internal(e)
    }
}

impl From<FindingsParseError> for ApiError {
    fn from(e: FindingsParseError) -> Self {
        ApiError::internal(e)
    }
}
