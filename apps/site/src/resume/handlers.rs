//! Axum route handlers for the résumé parser.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::resume::extract::extract_text;
use crate::resume::parse_resume;
use crate::state::AppState;

/// Multipart field names accepted for the uploaded file.
const FILE_FIELDS: [&str; 2] = ["file", "resume"];

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub resume: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub data: Value,
}

/// POST /api/parse-resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    payload: Result<Json<ParseResumeRequest>, JsonRejection>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let resume = request
        .resume
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing resume text.".to_string()))?;

    let data = parse_resume(&resume, &state.llm).await?;
    Ok(Json(ParseResumeResponse { data }))
}

/// POST /api/parse-resume/upload
///
/// Accepts a multipart upload, extracts its text and runs the same pipeline
/// as the JSON endpoint.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let mut text = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if !field.name().is_some_and(|n| FILE_FIELDS.contains(&n)) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        info!(
            file_name = file_name.as_deref().unwrap_or("<unnamed>"),
            bytes = data.len(),
            "Resume file uploaded"
        );

        text = Some(extract_upload(file_name, content_type, data).await?);
        break;
    }

    let text = text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing resume file.".to_string()))?;

    let data = parse_resume(&text, &state.llm).await?;
    Ok(Json(ParseResumeResponse { data }))
}

/// Extracts upload text on the blocking pool; PDF parsing is CPU-bound.
async fn extract_upload(
    file_name: Option<String>,
    content_type: Option<String>,
    data: Bytes,
) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || {
        extract_text(file_name.as_deref(), content_type.as_deref(), &data)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in resume extraction: {e}")))?
    .map_err(|e| AppError::UnprocessableEntity(e.to_string()))
}

/// Fallback for non-POST requests on the parser routes.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "current_thread")]
    async fn test_extract_upload_returns_text() {
        let text = extract_upload(
            Some("cv.txt".to_string()),
            Some("text/plain".to_string()),
            Bytes::from_static(b"Jane Doe\nRust"),
        )
        .await
        .unwrap();
        assert_eq!(text, "Jane Doe\nRust");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_extract_upload_broken_pdf_is_unprocessable() {
        let err = extract_upload(
            Some("cv.pdf".to_string()),
            None,
            Bytes::from_static(b"%PDF-1.4 truncated"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_extract_upload_word_file_is_unprocessable() {
        let err = extract_upload(Some("cv.docx".to_string()), None, Bytes::from_static(b"PK"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
