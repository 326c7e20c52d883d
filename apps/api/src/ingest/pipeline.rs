//! Ingest pipeline — what happens to an uploaded resume once its text is known.
//!
//! Policies stay separate: classifier call failures are surfaced (no verdict,
//! no acceptance), synthesis failures become a "fill it in manually" 422.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::profile::ResumeRecord;
use crate::resume::synthesizer::synthesize;
use crate::safety::classifier::classify;

/// Classifies the text, rejects unsafe content, then synthesizes a draft resume record.
pub async fn ingest_text(
    generator: &dyn TextGenerator,
    text: &str,
) -> Result<ResumeRecord, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "The uploaded file contains no readable text".to_string(),
        ));
    }

    let flagged = classify(generator, text)
        .await
        .map_err(|e| AppError::Llm(format!("Content classification failed: {e}")))?;
    if flagged {
        warn!("Rejected upload flagged as unsafe ({} chars)", text.len());
        return Err(AppError::UnsafeContent);
    }

    let resume = synthesize(generator, text).await.ok_or_else(|| {
        AppError::UnprocessableEntity(
            "Could not generate a resume from this file. Please fill it in manually.".to_string(),
        )
    })?;

    info!(
        "Ingested resume: {} roles ({} current), {} skills",
        resume.work_experience.len(),
        resume.work_experience.iter().filter(|w| w.is_current()).count(),
        resume.header.skills.len()
    );

    Ok(ResumeRecord::draft(resume))
}
