//! Application state.

use std::sync::Arc;

use tracing::info;
use tubeseo_engine::SeoEngine;
use tubeseo_youtube::{YoutubeClient, YoutubeError};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub engine: Arc<SeoEngine>,
    /// Present only when a YouTube API key is configured
    pub youtube: Option<Arc<YoutubeClient>>,
}

impl AppState {
    pub fn new(config: ApiConfig, engine: SeoEngine, youtube: Option<YoutubeClient>) -> Self {
        Self {
            config,
            engine: Arc::new(engine),
            youtube: youtube.map(Arc::new),
        }
    }

    /// Create application state from environment variables.
    pub fn from_env(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let engine = SeoEngine::from_env()?;

        let youtube = match YoutubeClient::from_env() {
            Ok(client) => Some(client),
            Err(YoutubeError::MissingApiKey) => {
                info!("YOUTUBE_API_KEY not set, competitor lookups and audits disabled");
                None
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self::new(config, engine, youtube))
    }
}
