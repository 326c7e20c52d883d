//! Axum route handlers for the content safety API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::safety::classifier::{classify, Verdict};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    #[serde(rename = "unsafe")]
    pub is_unsafe: bool,
    pub verdict: Verdict,
}

/// POST /api/v1/content/classify
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let is_unsafe = classify(state.generator.as_ref(), &request.content)
        .await
        .map_err(|e| AppError::Llm(format!("Content classification failed: {e}")))?;

    let verdict = if is_unsafe {
        Verdict::Unsafe
    } else {
        Verdict::Safe
    };

    Ok(Json(ClassifyResponse { is_unsafe, verdict }))
}
