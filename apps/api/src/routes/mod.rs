pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze_resume;
use crate::generation::handlers::handle_generate;
use crate::interview::handlers::handle_interview_prep;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handle_generate))
        .route("/api/analyze-resume", post(handle_analyze_resume))
        .route("/api/interview-prep", post(handle_interview_prep))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
