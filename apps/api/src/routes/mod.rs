pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{auth, course, extraction, quiz, resume, schedule, video};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/signup", post(auth::handlers::handle_signup))
        .route("/api/v1/auth/login", post(auth::handlers::handle_login))
        .route("/api/v1/auth/logout", post(auth::handlers::handle_logout))
        .route("/api/v1/auth/me", get(auth::handlers::handle_me))
        // Extraction collaborator
        .route(
            "/api/v1/extractions",
            post(extraction::handlers::handle_extract),
        )
        // Feature screens
        .route(
            "/api/v1/quiz/generate",
            post(quiz::handlers::handle_generate_quiz),
        )
        .route("/api/v1/quiz/score", post(quiz::handlers::handle_score_quiz))
        .route(
            "/api/v1/resume/analyze",
            post(resume::handlers::handle_analyze_resume),
        )
        .route(
            "/api/v1/schedule/from-document",
            post(schedule::handlers::handle_from_document),
        )
        .route(
            "/api/v1/schedule/by-topic",
            post(schedule::handlers::handle_by_topic),
        )
        .route(
            "/api/v1/schedule/manual",
            post(schedule::handlers::handle_manual),
        )
        .route(
            "/api/v1/video/segments",
            post(video::handlers::handle_extract_segments),
        )
        .route(
            "/api/v1/course/outline",
            post(course::handlers::handle_course_outline),
        )
        .with_state(state)
}
