//! Remote power word list with a TTL cache and a built-in fallback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use tubeseo_models::SourceStatus;

use crate::config::WordListConfig;
use crate::error::{EngineResult, WordListError};
use crate::lexicon::FALLBACK_POWER_WORDS;

/// A power word list and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerWords {
    pub words: Arc<Vec<String>>,
    pub status: SourceStatus,
}

impl PowerWords {
    pub fn online(words: Vec<String>) -> Self {
        Self {
            words: Arc::new(words),
            status: SourceStatus::Online,
        }
    }

    /// The built-in list.
    pub fn fallback() -> Self {
        Self {
            words: Arc::new(FALLBACK_POWER_WORDS.iter().map(|w| w.to_string()).collect()),
            status: SourceStatus::Offline,
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

/// Fetch and validate a remote word list.
///
/// The body must be a JSON array of strings with at least one non-blank
/// entry. Entries are trimmed and lowercased.
pub async fn fetch_power_words(http: &Client, url: &str) -> Result<Vec<String>, WordListError> {
    let response = http.get(url).send().await?;
    if response.status() != StatusCode::OK {
        return Err(WordListError::Status(response.status().as_u16()));
    }

    let body = response.bytes().await?;
    let value: Value = serde_json::from_slice(&body)?;
    let Value::Array(items) = value else {
        return Err(WordListError::Malformed("expected a JSON array".to_string()));
    };

    let mut words = Vec::with_capacity(items.len());
    for item in items {
        let word = match item {
            Value::String(word) => word,
            other => {
                return Err(WordListError::Malformed(format!(
                    "expected string entries, found {other}"
                )))
            }
        };
        let word = word.trim().to_lowercase();
        if !word.is_empty() {
            words.push(word);
        }
    }

    if words.is_empty() {
        return Err(WordListError::Empty);
    }
    Ok(words)
}

#[derive(Debug, Clone)]
struct CacheEntry {
    words: PowerWords,
    expires_at: Instant,
}

/// Cached access to the power word list.
///
/// `get` never fails: any fetch problem degrades to the fallback list with
/// [`SourceStatus::Offline`]. Only one caller refreshes an expired entry;
/// concurrent callers are served the stale list (or the fallback on a cold
/// cache) instead of waiting.
pub struct PowerWordCache {
    http: Client,
    config: WordListConfig,
    state: RwLock<Option<CacheEntry>>,
    refreshing: AtomicBool,
}

impl PowerWordCache {
    pub fn new(config: WordListConfig) -> EngineResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: Client, config: WordListConfig) -> Self {
        Self {
            http,
            config,
            state: RwLock::new(None),
            refreshing: AtomicBool::new(false),
        }
    }

    pub async fn get(&self) -> PowerWords {
        let Some(url) = self.config.url.as_deref() else {
            return PowerWords::fallback();
        };

        let cached = self.state.read().await.clone();
        if let Some(entry) = &cached {
            if entry.expires_at > Instant::now() {
                return entry.words.clone();
            }
        }

        let Some(_guard) = RefreshGuard::acquire(&self.refreshing) else {
            debug!("Power word refresh already in progress, serving current list");
            return cached
                .map(|entry| entry.words)
                .unwrap_or_else(PowerWords::fallback);
        };

        let entry = match fetch_power_words(&self.http, url).await {
            Ok(words) => {
                info!(count = words.len(), "Loaded power words from remote list");
                CacheEntry {
                    words: PowerWords::online(words),
                    expires_at: Instant::now() + self.config.ttl,
                }
            }
            Err(e) => {
                warn!(timeout = e.is_timeout(), "Power word fetch failed, using local list: {}", e);
                let words = match cached {
                    Some(previous) if previous.words.status.is_online() => previous.words,
                    _ => PowerWords::fallback(),
                };
                CacheEntry {
                    words,
                    expires_at: Instant::now() + self.config.offline_retry,
                }
            }
        };

        *self.state.write().await = Some(entry.clone());
        entry.words
    }

    /// Drop the cached list so the next `get` fetches again.
    pub async fn invalidate(&self) {
        *self.state.write().await = None;
    }
}

/// Clears the refresh flag even if the refreshing future is dropped.
struct RefreshGuard<'a>(&'a AtomicBool);

impl<'a> RefreshGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_url_serves_fallback() {
        let cache = PowerWordCache::new(WordListConfig::default()).unwrap();
        let words = cache.get().await;
        assert_eq!(words.status, SourceStatus::Offline);
        assert_eq!(words.as_slice().len(), FALLBACK_POWER_WORDS.len());
    }

    #[test]
    fn test_refresh_guard_is_exclusive() {
        let flag = AtomicBool::new(false);
        let first = RefreshGuard::acquire(&flag);
        assert!(first.is_some());
        assert!(RefreshGuard::acquire(&flag).is_none());
        drop(first);
        assert!(RefreshGuard::acquire(&flag).is_some());
    }
}
