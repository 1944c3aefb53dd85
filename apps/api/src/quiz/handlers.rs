//! Axum route handlers for the Quiz API.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::quiz::{generate_quiz, score_quiz, QuizQuestion};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    pub topic: String,
    pub num_questions: u32,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreQuizRequest {
    pub questions: Vec<QuizQuestion>,
    /// Question index → selected option text.
    pub answers: HashMap<usize, String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreQuizResponse {
    pub score: u32,
    pub total: usize,
}

/// POST /api/v1/quiz/generate
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(request): Json<GenerateQuizRequest>,
) -> Result<Json<GenerateQuizResponse>, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }
    if request.num_questions == 0 {
        return Err(AppError::Validation(
            "num_questions must be at least 1".to_string(),
        ));
    }

    let questions = generate_quiz(&state.llm, &request.topic, request.num_questions).await?;

    Ok(Json(GenerateQuizResponse { questions }))
}

/// POST /api/v1/quiz/score
///
/// Pure local computation, no LLM call.
pub async fn handle_score_quiz(
    _user: CurrentUser,
    Json(request): Json<ScoreQuizRequest>,
) -> Result<Json<ScoreQuizResponse>, AppError> {
    if request.questions.is_empty() {
        return Err(AppError::Validation(
            "questions cannot be empty".to_string(),
        ));
    }

    let score = score_quiz(&request.questions, &request.answers);

    Ok(Json(ScoreQuizResponse {
        score,
        total: request.questions.len(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::SessionStore;
    use crate::extraction::FixtureExtractor;
    use crate::llm_client::LlmClient;

    fn test_state() -> AppState {
        AppState {
            llm: LlmClient::new("test-key".to_string()),
            sessions: SessionStore::default(),
            extractor: Arc::new(FixtureExtractor),
        }
    }

    fn test_user() -> CurrentUser {
        CurrentUser {
            user_id: uuid::Uuid::new_v4(),
            email: "ada@example.com".to_string(),
        }
    }

    /// A blank required field must fail locally, before any external call.
    #[tokio::test]
    async fn test_blank_topic_rejected_without_llm_call() {
        let request = GenerateQuizRequest {
            topic: "   ".to_string(),
            num_questions: 5,
        };
        let result = handle_generate_quiz(State(test_state()), test_user(), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_zero_questions_rejected_without_llm_call() {
        let request = GenerateQuizRequest {
            topic: "Photosynthesis".to_string(),
            num_questions: 0,
        };
        let result = handle_generate_quiz(State(test_state()), test_user(), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_score_handler_rejects_empty_question_set() {
        let request = ScoreQuizRequest {
            questions: vec![],
            answers: HashMap::new(),
        };
        let result = handle_score_quiz(test_user(), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
