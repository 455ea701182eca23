//! Axum route handlers for the Resume API.

use axum::{extract::Multipart, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::analyzer::analyze_resume;
use crate::extraction::pdf::extract_pdf_text;
use crate::models::resume::ResumeAnalysis;

/// Multipart field carrying the uploaded résumé.
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// POST /resume/analyze
///
/// Analyzes résumé text that was already extracted by the caller.
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    Ok(Json(analyze_resume(&request.text)))
}

/// POST /resume/upload
///
/// Accepts a PDF in the multipart field `file`, extracts its text and analyzes it.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<ResumeAnalysis>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        info!("Extracting text from {file_name} ({} bytes)", data.len());
        let text = extract_pdf_text(data).await?;
        return Ok(Json(analyze_resume(&text)));
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{UPLOAD_FIELD}'"
    )))
}
