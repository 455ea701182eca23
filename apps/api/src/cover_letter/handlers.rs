//! Axum route handlers for the Cover Letter API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::cover_letter::generator::{generate_cover_letter, GenerateCoverLetterRequest};
use crate::cover_letter::parser::parse_generated_letter;
use crate::errors::AppError;
use crate::models::cover_letter::CoverLetterDocument;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseLetterRequest {
    pub text: String,
}

/// POST /cover-letter/parse
///
/// Recovers the letter structure from already generated text.
pub async fn handle_parse_letter(
    Json(request): Json<ParseLetterRequest>,
) -> Result<Json<CoverLetterDocument>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    Ok(Json(parse_generated_letter(&request.text)))
}

/// POST /cover-letter/generate-cover-letter
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<GenerateCoverLetterRequest>,
) -> Result<Json<CoverLetterDocument>, AppError> {
    let doc = generate_cover_letter(state.llm.as_ref(), &request).await?;
    Ok(Json(doc))
}
