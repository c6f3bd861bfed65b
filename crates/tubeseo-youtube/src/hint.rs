//! Trending power word hint.

use async_trait::async_trait;
use tracing::{debug, error, warn};
use tubeseo_engine::extract_trending_word;

use crate::client::YoutubeClient;
use crate::error::YoutubeResult;

/// Something that can report the title of the top search result for a keyword.
#[async_trait]
pub trait TrendingHintSource: Send + Sync {
    async fn top_result_title(&self, keyword: &str) -> YoutubeResult<Option<String>>;
}

#[async_trait]
impl TrendingHintSource for YoutubeClient {
    async fn top_result_title(&self, keyword: &str) -> YoutubeResult<Option<String>> {
        Ok(self.search_titles(keyword, 1).await?.into_iter().next())
    }
}

/// Ask `source` for a power word hint. Failures are logged and yield `None`
/// so the generator keeps its own choice.
pub async fn resolve_trending_word(source: &dyn TrendingHintSource, keyword: &str) -> Option<String> {
    if keyword.trim().is_empty() {
        return None;
    }

    match source.top_result_title(keyword).await {
        Ok(Some(title)) => {
            let word = extract_trending_word(&title);
            debug!(title = %title, hint = ?word, "Top search result inspected");
            word
        }
        Ok(None) => None,
        Err(e) if e.is_credential_problem() => {
            error!("Trending hint lookup rejected, check the YouTube API key: {}", e);
            None
        }
        Err(e) => {
            warn!("Trending hint lookup failed, ignoring: {}", e);
            None
        }
    }
}
