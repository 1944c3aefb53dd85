//! Axum route handlers for the Resume API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::resume::{analyze_resume, ResumeAnalysis};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    pub resume_text: String,
    pub job_description: String,
    pub focus_role: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub result: ResumeAnalysis,
}

/// POST /api/v1/resume/analyze
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if request.focus_role.trim().is_empty() {
        return Err(AppError::Validation(
            "focus_role cannot be empty".to_string(),
        ));
    }

    let result = analyze_resume(
        &state.llm,
        &request.resume_text,
        &request.job_description,
        &request.focus_role,
    )
    .await?;

    Ok(Json(AnalyzeResumeResponse { result }))
}
