pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::cover_letter::handlers as cover_letter;
use crate::extraction::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/health/llm", get(health::llm_health_handler))
        // Resume API
        .route("/resume/analyze", post(resume::handle_analyze))
        .route(
            "/resume/upload",
            post(resume::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Cover Letter API
        .route("/cover-letter/parse", post(cover_letter::handle_parse_letter))
        .route(
            "/cover-letter/generate-cover-letter",
            post(cover_letter::handle_generate_cover_letter),
        )
        .with_state(state)
}
