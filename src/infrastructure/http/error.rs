//! HTTP Error Handling
//!
//! 对外契约为纯文本错误响应：
//! - 400 `Text parameter is required`
//! - 500 `Error processing request: <message>`
//!
//! 所有失败路径都在请求处理边界处转换为 HTTP 错误响应，不做重试

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::ports::TtsError;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求参数错误，响应体为原始文案
    BadRequest(String),
    /// 处理失败，响应体为 "Error processing request: <message>"
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Error processing request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error processing request: {}", msg),
                )
                    .into_response()
            }
        }
    }
}

impl From<TtsError> for ApiError {
    fn from(e: TtsError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
