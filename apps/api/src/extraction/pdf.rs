use bytes::Bytes;
use tracing::warn;

use crate::errors::AppError;

/// Pulls the text layer out of an uploaded PDF on the blocking pool.
///
/// Scanned or image-only PDFs have no text layer and are rejected with 422.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            if e.is_panic() {
                // The parser panics on some malformed files.
                warn!("PDF extraction panicked: {e}");
                AppError::UnprocessableEntity("PDF could not be read".to_string())
            } else {
                AppError::Internal(anyhow::Error::new(e).context("PDF extraction task cancelled"))
            }
        })?;

    let text = extracted.map_err(|e| {
        warn!("PDF extraction failed: {e}");
        AppError::UnprocessableEntity(format!("PDF could not be read: {e}"))
    })?;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "PDF contains no extractable text".to_string(),
        ));
    }
    Ok(text)
}
