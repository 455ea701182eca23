use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "CareerCraft API is running" }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careercraft-api"
    }))
}

/// GET /health/llm
/// Reports whether the generation backend answers and has the configured model.
pub async fn llm_health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "available": state.llm.is_available().await,
        "model": state.llm.model(),
        "base_url": state.config.ollama_url
    }))
}
