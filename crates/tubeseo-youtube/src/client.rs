//! YouTube Data API HTTP client.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use tubeseo_models::UploadRecord;

use crate::error::{YoutubeError, YoutubeResult};
use crate::types::{
    ChannelItem, ErrorEnvelope, ListResponse, PlaylistItem, SearchItem, VideoItem,
};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Number of search results inspected for competitor tags.
const COMPETITOR_SAMPLE: u32 = 5;

/// Number of competitor tags returned before keyword filtering.
const COMPETITOR_TOP_TAGS: usize = 10;

/// Configuration for the YouTube client.
#[derive(Debug, Clone)]
pub struct YoutubeConfig {
    /// Data API key
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl YoutubeConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("YOUTUBE_API_KEY")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            base_url: std::env::var("YOUTUBE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("YOUTUBE_API_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}

/// Client for the YouTube Data API v3.
pub struct YoutubeClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl YoutubeClient {
    /// Create a new client. Fails without an API key.
    pub fn new(config: YoutubeConfig) -> YoutubeResult<Self> {
        let api_key = config.api_key.ok_or(YoutubeError::MissingApiKey)?;
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(YoutubeError::Network)?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> YoutubeResult<Self> {
        Self::new(YoutubeConfig::from_env())
    }

    /// Titles of the top video search results for `query`.
    pub async fn search_titles(&self, query: &str, max_results: u32) -> YoutubeResult<Vec<String>> {
        let max = max_results.to_string();
        let response: ListResponse<SearchItem> = self
            .get(
                "search",
                &[("part", "snippet"), ("type", "video"), ("q", query), ("maxResults", &max)],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| item.snippet.map(|s| s.title))
            .collect())
    }

    /// Most common tags among the top results for `keyword`, excluding tags
    /// that contain the keyword itself.
    pub async fn competitor_tags(&self, keyword: &str) -> YoutubeResult<Vec<String>> {
        let max = COMPETITOR_SAMPLE.to_string();
        let search: ListResponse<SearchItem> = self
            .get(
                "search",
                &[("part", "id"), ("type", "video"), ("q", keyword), ("maxResults", &max)],
            )
            .await?;

        let ids: Vec<String> = search
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids.join(",");
        let videos: ListResponse<VideoItem> = self
            .get("videos", &[("part", "snippet"), ("id", &joined)])
            .await?;

        let all_tags = videos.items.into_iter().flat_map(|v| v.snippet.tags);
        Ok(rank_competitor_tags(all_tags, keyword))
    }

    /// Most recent uploads of a channel, newest first.
    pub async fn channel_uploads(&self, channel_id: &str, limit: u32) -> YoutubeResult<Vec<UploadRecord>> {
        let channels: ListResponse<ChannelItem> = self
            .get("channels", &[("part", "contentDetails"), ("id", channel_id)])
            .await?;

        let uploads = channels
            .items
            .into_iter()
            .next()
            .map(|c| c.content_details.related_playlists.uploads)
            .ok_or_else(|| YoutubeError::ChannelNotFound(channel_id.to_string()))?;

        debug!("Fetching {} uploads from playlist {}", limit, uploads);

        let max = limit.to_string();
        let items: ListResponse<PlaylistItem> = self
            .get(
                "playlistItems",
                &[("part", "snippet"), ("playlistId", &uploads), ("maxResults", &max)],
            )
            .await?;

        Ok(items
            .items
            .into_iter()
            .map(|item| {
                let snippet = item.snippet;
                UploadRecord {
                    video_id: snippet.resource_id.and_then(|r| r.video_id),
                    title: snippet.title,
                    thumbnail_url: snippet.thumbnails.default.map(|t| t.url),
                    published_at: snippet.published_at,
                }
            })
            .collect())
    }

    async fn get<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, &str)]) -> YoutubeResult<T> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error(status, &body));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Map an error response to a typed error using the API's `reason` codes.
fn classify_error(status: StatusCode, body: &str) -> YoutubeError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let reasons: Vec<&str> = envelope
        .as_ref()
        .map(|e| e.error.errors.iter().map(|d| d.reason.as_str()).collect())
        .unwrap_or_default();
    let message = envelope
        .as_ref()
        .map(|e| e.error.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.to_string());

    if reasons.iter().any(|r| matches!(*r, "quotaExceeded" | "dailyLimitExceeded")) {
        return YoutubeError::QuotaExceeded;
    }
    if reasons.iter().any(|r| matches!(*r, "keyInvalid" | "keyExpired")) {
        return YoutubeError::InvalidApiKey(message);
    }

    warn!("YouTube API returned {}: {}", status, message);
    YoutubeError::RequestFailed(format!("YouTube API returned {}: {}", status, message))
}

/// Count tags, keep the most frequent (ties in first-seen order) and drop
/// those containing the keyword.
fn rank_competitor_tags(tags: impl IntoIterator<Item = String>, keyword: &str) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (index, tag) in tags.into_iter().enumerate() {
        counts.entry(tag).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(tag, (count, first))| (tag, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let keyword = keyword.to_lowercase();
    ranked
        .into_iter()
        .take(COMPETITOR_TOP_TAGS)
        .map(|(tag, _, _)| tag)
        .filter(|tag| !tag.to_lowercase().contains(&keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = YoutubeConfig::default();
        assert_eq!(config.base_url, "https://www.googleapis.com/youtube/v3");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(matches!(YoutubeClient::new(config), Err(YoutubeError::MissingApiKey)));
    }

    #[test]
    fn test_rank_competitor_tags() {
        let tags = ["jazz", "sleep", "relaxing jazz", "sleep", "piano", "study", "piano", "sleep"]
            .into_iter()
            .map(String::from);
        assert_eq!(rank_competitor_tags(tags, "Jazz"), vec!["sleep", "piano", "study"]);
    }

    #[test]
    fn test_classify_quota_error() {
        let body = r#"{"error":{"code":403,"message":"quota","errors":[{"reason":"quotaExceeded"}]}}"#;
        assert!(matches!(
            classify_error(StatusCode::FORBIDDEN, body),
            YoutubeError::QuotaExceeded
        ));
    }

    #[test]
    fn test_classify_invalid_key() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","errors":[{"reason":"keyInvalid"}]}}"#;
        match classify_error(StatusCode::BAD_REQUEST, body) {
            YoutubeError::InvalidApiKey(msg) => assert_eq!(msg, "API key not valid"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_classify_unknown_body() {
        assert!(matches!(
            classify_error(StatusCode::BAD_GATEWAY, "upstream down"),
            YoutubeError::RequestFailed(_)
        ));
    }
}
