//! Axum route handlers for the Schedule API.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::schedule::{
    assemble_manual, generate_by_topic, generate_from_document, DifficultyLevel, ManualEntry,
    ScheduledEvent, DATE_FORMAT,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FromDocumentRequest {
    pub document_text: String,
    pub start_date: String,
    pub duration_weeks: u32,
}

#[derive(Debug, Deserialize)]
pub struct ByTopicRequest {
    pub learning_topic: String,
    #[serde(default)]
    pub difficulty: DifficultyLevel,
    pub start_date: String,
    pub duration_weeks: u32,
}

#[derive(Debug, Deserialize)]
pub struct ManualScheduleRequest {
    pub entries: Vec<ManualEntry>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub events: Vec<ScheduledEvent>,
}

/// POST /api/v1/schedule/from-document
pub async fn handle_from_document(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(request): Json<FromDocumentRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    if request.document_text.trim().is_empty() {
        return Err(AppError::Validation(
            "document_text cannot be empty".to_string(),
        ));
    }
    validate_schedule_window(&request.start_date, request.duration_weeks)?;

    let events = generate_from_document(
        &state.llm,
        &request.document_text,
        &request.start_date,
        request.duration_weeks,
    )
    .await?;

    Ok(Json(ScheduleResponse { events }))
}

/// POST /api/v1/schedule/by-topic
pub async fn handle_by_topic(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(request): Json<ByTopicRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    if request.learning_topic.trim().is_empty() {
        return Err(AppError::Validation(
            "learning_topic cannot be empty".to_string(),
        ));
    }
    validate_schedule_window(&request.start_date, request.duration_weeks)?;

    let events = generate_by_topic(
        &state.llm,
        &request.learning_topic,
        request.difficulty,
        &request.start_date,
        request.duration_weeks,
    )
    .await?;

    Ok(Json(ScheduleResponse { events }))
}

/// POST /api/v1/schedule/manual
///
/// Assembles manual entries into a sorted schedule with no LLM call.
pub async fn handle_manual(
    _user: CurrentUser,
    Json(request): Json<ManualScheduleRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    if request.entries.is_empty() {
        return Err(AppError::Validation("entries cannot be empty".to_string()));
    }
    for entry in &request.entries {
        if entry.date.trim().is_empty()
            || entry.topic.trim().is_empty()
            || entry.activity.trim().is_empty()
        {
            return Err(AppError::Validation(
                "each entry needs a date, a topic, and an activity".to_string(),
            ));
        }
    }

    Ok(Json(ScheduleResponse {
        events: assemble_manual(request.entries),
    }))
}

fn validate_schedule_window(start_date: &str, duration_weeks: u32) -> Result<(), AppError> {
    if NaiveDate::parse_from_str(start_date, DATE_FORMAT).is_err() {
        return Err(AppError::Validation(
            "start_date must be a date in YYYY-MM-DD format".to_string(),
        ));
    }
    if duration_weeks == 0 {
        return Err(AppError::Validation(
            "duration_weeks must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_window_accepts_iso_date() {
        assert!(validate_schedule_window("2024-06-01", 4).is_ok());
    }

    #[test]
    fn test_schedule_window_rejects_free_form_date() {
        let result = validate_schedule_window("June 1st", 4);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_schedule_window_rejects_zero_weeks() {
        let result = validate_schedule_window("2024-06-01", 0);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
