//! Title analysis handlers.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use tubeseo_models::{OptimizeReport, SourceStatus};
use tubeseo_youtube::resolve_trending_word;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Title analysis request.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub title: String,
    pub keyword: String,
}

/// Title analysis response.
#[derive(Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: OptimizeReport,
    /// Score band: good, fair or poor
    pub grade: &'static str,
    /// Most common tags among top competitors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub competitor_tags: Vec<String>,
}

/// Score a draft title and generate suggestions, tags and a description.
pub async fn analyze_title(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let title = request.title.trim();
    let keyword = request.keyword.trim();
    if title.is_empty() || keyword.is_empty() {
        return Err(ApiError::bad_request("Both keyword and title are required"));
    }

    let (trending, competitor_tags) = match &state.youtube {
        Some(youtube) => {
            let trending = resolve_trending_word(youtube.as_ref(), keyword).await;
            let tags = match youtube.competitor_tags(keyword).await {
                Ok(tags) => tags,
                Err(e) if e.is_credential_problem() => {
                    error!("Competitor tag lookup rejected, check the YouTube API key: {}", e);
                    Vec::new()
                }
                Err(e) => {
                    warn!("Competitor tag lookup failed, ignoring: {}", e);
                    Vec::new()
                }
            };
            (trending, tags)
        }
        None => (None, Vec::new()),
    };

    let report = state
        .engine
        .optimize(title, keyword, trending.as_deref())
        .await;

    Ok(Json(AnalyzeResponse {
        grade: report.analysis.grade(),
        report,
        competitor_tags,
    }))
}

/// Active power word list.
#[derive(Serialize)]
pub struct PowerWordsResponse {
    pub status: SourceStatus,
    pub label: String,
    pub count: usize,
    pub words: Vec<String>,
}

/// Power word list query.
#[derive(Debug, Default, Deserialize)]
pub struct PowerWordsQuery {
    /// Drop the cached list and fetch it again
    #[serde(default)]
    pub refresh: bool,
}

/// Report the power word list and where it came from.
pub async fn power_words(
    State(state): State<AppState>,
    Query(query): Query<PowerWordsQuery>,
) -> Json<PowerWordsResponse> {
    let cache = state.engine.power_words();
    if query.refresh {
        info!("Power word list refresh requested");
        cache.invalidate().await;
    }
    let words = cache.get().await;
    Json(PowerWordsResponse {
        status: words.status,
        label: words.status.label().to_string(),
        count: words.words.len(),
        words: words.as_slice().to_vec(),
    })
}
