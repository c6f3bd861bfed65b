//! Engine error types.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that indicate a programming or configuration mistake.
///
/// Degenerate inputs (empty titles, missing keywords, an unreachable word
/// list) never produce these.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid title template '{name}': {reason}")]
    Template { name: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl EngineError {
    pub fn template(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Template {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Why a remote power word list could not be used.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Word list returned HTTP {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed word list: {0}")]
    Malformed(String),

    #[error("Word list is empty")]
    Empty,
}

impl WordListError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, WordListError::Network(e) if e.is_timeout())
    }
}
