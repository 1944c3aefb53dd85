//! Axum route handlers for the Course API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::course::{generate_course_outline, CourseOutline};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CourseOutlineRequest {
    pub subject: String,
    pub learning_outcomes: String,
    pub duration_weeks: u32,
}

#[derive(Debug, Serialize)]
pub struct CourseOutlineResponse {
    pub modules: CourseOutline,
}

/// POST /api/v1/course/outline
pub async fn handle_course_outline(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(request): Json<CourseOutlineRequest>,
) -> Result<Json<CourseOutlineResponse>, AppError> {
    if request.subject.trim().is_empty() {
        return Err(AppError::Validation("subject cannot be empty".to_string()));
    }
    if request.learning_outcomes.trim().is_empty() {
        return Err(AppError::Validation(
            "learning_outcomes cannot be empty".to_string(),
        ));
    }
    if request.duration_weeks == 0 {
        return Err(AppError::Validation(
            "duration_weeks must be at least 1".to_string(),
        ));
    }

    let modules = generate_course_outline(
        &state.llm,
        &request.subject,
        &request.learning_outcomes,
        request.duration_weeks,
    )
    .await?;

    Ok(Json(CourseOutlineResponse { modules }))
}
