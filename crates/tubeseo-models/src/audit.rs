//! Channel audit models.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::TitleAnalysis;
use crate::suggestion::Suggestion;

/// An upload pulled from a channel's uploads playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UploadRecord {
    /// Video ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,

    pub title: String,

    /// Default thumbnail URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl UploadRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            video_id: None,
            title: title.into(),
            thumbnail_url: None,
            published_at: None,
        }
    }
}

/// Audit result for a single upload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuditEntry {
    pub record: UploadRecord,

    /// Keyword guessed from the upload title
    pub guessed_keyword: String,

    pub analysis: TitleAnalysis,

    /// Only filled for uploads scoring below 100
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}
