//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use tubeseo_youtube::YoutubeError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("YouTube error: {0}")]
    Youtube(#[from] YoutubeError),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Youtube(e) => match e {
                YoutubeError::ChannelNotFound(_) => StatusCode::NOT_FOUND,
                YoutubeError::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
                YoutubeError::MissingApiKey => StatusCode::BAD_REQUEST,
                _ => StatusCode::BAD_GATEWAY,
            },
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            ApiError::Youtube(YoutubeError::QuotaExceeded) => Some("quota_exceeded"),
            ApiError::Youtube(YoutubeError::InvalidApiKey(_)) => Some("invalid_api_key"),
            ApiError::Youtube(YoutubeError::ChannelNotFound(_)) => Some("channel_not_found"),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Transport errors carry the request URL, which includes the API key
        let detail = match &self {
            ApiError::Youtube(YoutubeError::Network(e)) => {
                warn!("YouTube request failed: {}", e);
                "YouTube API is unreachable".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            detail,
            code: self.code().map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}
