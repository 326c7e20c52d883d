//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::resume::synthesizer::synthesize;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct SynthesizeResponse {
    pub resume: ResumeData,
}

/// POST /api/v1/resumes/synthesize
///
/// Turns pasted resume text into a structured resume. A 422 means the model
/// output was unusable and the client should offer manual entry instead.
pub async fn handle_synthesize(
    State(state): State<AppState>,
    Json(request): Json<SynthesizeRequest>,
) -> Result<Json<SynthesizeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let resume = synthesize(state.generator.as_ref(), &request.resume_text)
        .await
        .ok_or_else(|| {
            AppError::UnprocessableEntity(
                "Could not generate a resume from this text. Please fill it in manually."
                    .to_string(),
            )
        })?;

    Ok(Json(SynthesizeResponse { resume }))
}
