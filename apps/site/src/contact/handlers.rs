use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::contact::ContactRequest;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
}

/// POST /api/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let submission = request.into_submission()?;

    let submission_id = Uuid::new_v4();
    info!(%submission_id, "Forwarding contact submission");

    state
        .mailer
        .send(&submission)
        .await
        .map_err(|e| AppError::Email(format!("submission {submission_id}: {e}")))?;

    info!(%submission_id, "Contact email sent");
    Ok(Json(ContactResponse {
        message: "Email sent successfully!".to_string(),
    }))
}
