//! Request Extractors

use axum::extract::{rejection::JsonRejection, FromRequest};

use super::error::ApiError;

/// JSON 请求体提取器，解析失败时返回统一的 `{errno, error}` 响应
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
