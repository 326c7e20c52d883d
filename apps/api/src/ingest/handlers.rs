//! Axum route handler for resume file uploads.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::ingest::extract::extract_text;
use crate::ingest::pipeline::ingest_text;
use crate::models::profile::ResumeRecord;
use crate::state::AppState;

/// Multipart field carrying the resume file.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub resume: ResumeRecord,
}

/// POST /api/v1/uploads
///
/// Accepts a PDF or plain-text resume in the `file` field and returns a draft
/// resume record. Unsafe content and unusable model output both answer 422.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;

        if data.len() > state.config.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "File exceeds the {} byte upload limit",
                state.config.max_upload_bytes
            )));
        }

        info!(
            "Received upload {:?} ({} bytes, {:?})",
            file_name,
            data.len(),
            content_type
        );

        let text = extract_text(file_name.as_deref(), content_type.as_deref(), data)
            .await
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let resume = ingest_text(state.generator.as_ref(), &text).await?;
        return Ok(Json(UploadResponse { resume }));
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{FILE_FIELD}'"
    )))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}
