//! Channel audit handler.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use tubeseo_models::AuditEntry;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Channel audit request.
#[derive(Debug, Deserialize)]
pub struct AuditRequest {
    pub channel_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

/// Channel audit response.
#[derive(Serialize)]
pub struct AuditResponse {
    pub channel_id: String,
    pub count: usize,
    /// Mean score across audited uploads
    pub average_score: f64,
    pub entries: Vec<AuditEntry>,
}

/// Score a channel's most recent uploads.
pub async fn audit_channel(
    State(state): State<AppState>,
    Json(request): Json<AuditRequest>,
) -> ApiResult<Json<AuditResponse>> {
    let youtube = state
        .youtube
        .as_ref()
        .ok_or_else(|| ApiError::bad_request("Channel audit requires a YouTube API key"))?;

    let channel_id = request.channel_id.trim();
    if channel_id.is_empty() {
        return Err(ApiError::bad_request("Channel ID is required"));
    }

    let limit = request.limit.clamp(1, state.config.max_audit_videos.max(1));
    let uploads = youtube.channel_uploads(channel_id, limit).await?;
    info!(channel_id, uploads = uploads.len(), "Auditing channel uploads");

    let entries = state.engine.audit(uploads).await;
    let average_score = if entries.is_empty() {
        0.0
    } else {
        entries.iter().map(|e| f64::from(e.analysis.score)).sum::<f64>() / entries.len() as f64
    };

    Ok(Json(AuditResponse {
        channel_id: channel_id.to_string(),
        count: entries.len(),
        average_score,
        entries,
    }))
}
