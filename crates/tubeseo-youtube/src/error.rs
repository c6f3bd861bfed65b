//! YouTube client error types.

use thiserror::Error;

pub type YoutubeResult<T> = Result<T, YoutubeError>;

#[derive(Debug, Error)]
pub enum YoutubeError {
    #[error("YouTube API key is not configured")]
    MissingApiKey,

    #[error("YouTube API key was rejected: {0}")]
    InvalidApiKey(String),

    #[error("YouTube API quota exceeded")]
    QuotaExceeded,

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl YoutubeError {
    /// Errors caused by the configured credentials or quota rather than the request.
    pub fn is_credential_problem(&self) -> bool {
        matches!(
            self,
            YoutubeError::MissingApiKey | YoutubeError::InvalidApiKey(_) | YoutubeError::QuotaExceeded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_problems() {
        assert!(YoutubeError::MissingApiKey.is_credential_problem());
        assert!(YoutubeError::QuotaExceeded.is_credential_problem());
        assert!(YoutubeError::InvalidApiKey("bad".into()).is_credential_problem());
        assert!(!YoutubeError::ChannelNotFound("UC1".into()).is_credential_problem());
        assert!(!YoutubeError::RequestFailed("502".into()).is_credential_problem());
    }
}
