//! Contact form: validates a submission and forwards it to the e-mail provider.
//!
//! Only presence is checked. Whatever the provider reports as a failure is
//! surfaced as a generic 500; nothing is queued or retried.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub mod handlers;
pub mod mailer;

/// Body of `POST /api/contact` as sent by the browser. Every field may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Requires `name`, `email` and `message` to be present and non-blank.
    pub fn into_submission(self) -> Result<ContactSubmission, AppError> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}.",
                missing.join(", ")
            )));
        }

        Ok(ContactSubmission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}
