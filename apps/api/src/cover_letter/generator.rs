//! Cover letter generation: validate → availability check → prompt → generate
//! → parse → finalize.

use serde::Deserialize;
use tracing::{info, warn};

use crate::cover_letter::parser::parse_generated_letter;
use crate::cover_letter::prompts::build_prompt;
use crate::errors::AppError;
use crate::llm_client::{GenerationParams, TextGenerator};
use crate::models::cover_letter::{CoverLetterDocument, JobInfo};
use crate::models::resume::ResumeAnalysis;

pub const LETTER_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.7,
    max_tokens: 1000,
};

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateCoverLetterRequest {
    /// Required; a missing or empty analysis is rejected.
    pub resume_analysis: Option<ResumeAnalysis>,
    pub job_info: JobInfo,
    #[serde(default)]
    pub candidate_name: Option<String>,
}

pub async fn generate_cover_letter(
    llm: &dyn TextGenerator,
    request: &GenerateCoverLetterRequest,
) -> Result<CoverLetterDocument, AppError> {
    let analysis = match &request.resume_analysis {
        Some(analysis) if !analysis.is_empty() => analysis,
        _ => {
            return Err(AppError::Validation(
                "resume_analysis is required".to_string(),
            ))
        }
    };
    let job = &request.job_info;
    if job.company_name.trim().is_empty() {
        return Err(AppError::Validation(
            "job_info.company_name cannot be empty".to_string(),
        ));
    }
    if job.job_title.trim().is_empty() {
        return Err(AppError::Validation(
            "job_info.job_title cannot be empty".to_string(),
        ));
    }

    if !llm.is_available().await {
        warn!("LLM backend unavailable (model: {})", llm.model());
        return Err(AppError::LlmUnavailable(format!(
            "model '{}' is not reachable",
            llm.model()
        )));
    }

    let candidate_name = request
        .candidate_name
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    let prompt = build_prompt(analysis, job, candidate_name);

    info!(
        company = job.company_name.trim(),
        job_title = job.job_title.trim(),
        model = llm.model(),
        "generating cover letter"
    );

    let raw = llm
        .generate(&prompt, LETTER_PARAMS)
        .await
        .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))?;

    let mut doc = parse_generated_letter(&raw);
    finalize(&mut doc, job, candidate_name);

    info!(paragraphs = doc.body.len(), "cover letter generated");
    Ok(doc)
}

/// Addresses the greeting to the company and replaces whatever name the
/// parser guessed with the caller's, which may be empty.
pub fn finalize(doc: &mut CoverLetterDocument, job: &JobInfo, candidate_name: &str) {
    let company = job.company_name.trim();
    if !doc.greeting.contains(company) {
        doc.greeting = format!("Dear Hiring Manager at {company},");
    }
    doc.candidate_name = candidate_name.to_string();
}
