//! Axum route handlers for the Video API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::state::AppState;
use crate::video::{extract_segments, VideoSegment};

#[derive(Debug, Deserialize)]
pub struct ExtractSegmentsRequest {
    pub transcript: String,
    pub num_segments: u32,
    #[serde(default)]
    pub specific_topic: Option<String>,
}

/// A segment plus its display-ready time range.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSegmentView {
    #[serde(flatten)]
    pub segment: VideoSegment,
    pub time_range: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSegmentsResponse {
    pub segments: Vec<VideoSegmentView>,
}

/// POST /api/v1/video/segments
pub async fn handle_extract_segments(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(request): Json<ExtractSegmentsRequest>,
) -> Result<Json<ExtractSegmentsResponse>, AppError> {
    if request.transcript.trim().is_empty() {
        return Err(AppError::Validation(
            "transcript cannot be empty".to_string(),
        ));
    }
    if request.num_segments == 0 {
        return Err(AppError::Validation(
            "num_segments must be at least 1".to_string(),
        ));
    }
    let specific_topic = request
        .specific_topic
        .as_deref()
        .map(str::trim)
        .filter(|topic| !topic.is_empty());

    let segments = extract_segments(
        &state.llm,
        &request.transcript,
        request.num_segments,
        specific_topic,
    )
    .await?;

    let segments = segments
        .into_iter()
        .map(|segment| VideoSegmentView {
            time_range: segment.time_range(),
            segment,
        })
        .collect();

    Ok(Json(ExtractSegmentsResponse { segments }))
}
