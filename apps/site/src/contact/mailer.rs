//! E-mail delivery: pluggable sender behind a trait.
//!
//! `AppState` holds an `Arc<dyn EmailSender>`; the default is `HttpMailer`,
//! which talks to a Resend-compatible `/emails` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::contact::ContactSubmission;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider rejected message (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), EmailError>;
}

#[derive(Debug, Serialize)]
struct OutgoingEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: String,
    text: String,
}

/// Sends contact submissions through an HTTP e-mail API.
pub struct HttpMailer {
    client: Client,
    api_url: String,
    api_key: String,
    from: String,
    to: String,
}

impl HttpMailer {
    pub fn new(api_url: impl Into<String>, api_key: String, from: String, to: String) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key,
            from,
            to,
        }
    }
}

#[async_trait]
impl EmailSender for HttpMailer {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), EmailError> {
        let email = OutgoingEmail {
            from: &self.from,
            to: [self.to.as_str()],
            reply_to: &submission.email,
            subject: format!("New contact form submission from {}", submission.name),
            text: format!(
                "Name: {}\nEmail: {}\n\n{}",
                submission.name, submission.email, submission.message
            ),
        };

        let response = self
            .client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Contact email accepted by provider");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    fn mailer(server: &MockServer) -> HttpMailer {
        HttpMailer::new(
            server.base_url(),
            "mail-key".to_string(),
            "site@example.com".to_string(),
            "owner@example.com".to_string(),
        )
    }

    #[tokio::test]
    async fn test_send_posts_message_to_provider() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/emails")
                    .header("authorization", "Bearer mail-key")
                    .json_body_partial(
                        json!({
                            "from": "site@example.com",
                            "to": ["owner@example.com"],
                            "reply_to": "ada@example.com",
                            "subject": "New contact form submission from Ada"
                        })
                        .to_string(),
                    );
                then.status(200).json_body(json!({"id": "msg_1"}));
            })
            .await;

        mailer(&server).send(&submission()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_provider_error_status_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/emails");
                then.status(422).body("invalid from address");
            })
            .await;

        let err = mailer(&server).send(&submission()).await.unwrap_err();
        match err {
            EmailError::Rejected { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "invalid from address");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
