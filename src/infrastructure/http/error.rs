//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorResponse;
use crate::application::ApplicationError;

/// 合成失败时的错误标识
pub const TTS_FAILED: &str = "tts failed";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 400：请求缺少必要输入
    BadRequest(String),
    /// 500：合成失败，附带失败原因
    SynthesisFailed(String),
    /// 500：其它内部错误
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            ApiError::SynthesisFailed(details) => {
                tracing::error!(details = %details, "TTS failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(TTS_FAILED).with_details(details),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg))
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::InputMissing(msg) => ApiError::BadRequest(msg),
            ApplicationError::SynthesisFailed(err) => ApiError::SynthesisFailed(err.to_string()),
            ApplicationError::StorageError(err) => ApiError::Internal(err.to_string()),
        }
    }
}
