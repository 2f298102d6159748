//! Résumé parsing: forwards résumé text to the LLM with a fixed extraction
//! prompt and hands back whatever JSON the model produced.
//!
//! The model output is best-effort: it is not checked against the requested
//! key set and a reply that is not JSON is returned as `{error, raw}` instead
//! of failing the request.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::EXTRACTION_TEMPERATURE;
use crate::llm_client::{strip_json_fences, LlmClient};
use crate::resume::prompts::{build_resume_prompt, RESUME_PARSE_SYSTEM};

pub mod extract;
pub mod handlers;
pub mod prompts;

/// Error marker placed in the soft-failure object.
pub const PARSE_FAILURE_MARKER: &str = "Failed to parse JSON from model response";

/// Sends résumé text to the LLM and interprets the reply.
///
/// Provider failures are hard errors; malformed or missing output is not.
pub async fn parse_resume(resume_text: &str, llm: &LlmClient) -> Result<Value, AppError> {
    let prompt = build_resume_prompt(resume_text);
    let raw = llm
        .call_text(&prompt, RESUME_PARSE_SYSTEM, EXTRACTION_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Resume parsing failed: {e}")))?;

    info!(chars = resume_text.len(), "Resume parsed by LLM");
    match raw {
        Some(raw) => Ok(interpret_completion(&raw)),
        None => {
            warn!("Model response carried no content");
            Ok(json!({
                "error": PARSE_FAILURE_MARKER,
                "raw": Value::Null,
            }))
        }
    }
}

/// Parses model output as JSON, falling back to an object that carries the
/// raw text and an error marker.
pub fn interpret_completion(raw: &str) -> Value {
    match serde_json::from_str::<Value>(strip_json_fences(raw)) {
        Ok(value) => value,
        Err(e) => {
            warn!("Model response was not valid JSON: {e}");
            json!({
                "error": PARSE_FAILURE_MARKER,
                "raw": raw,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_valid_json_is_returned_unchanged() {
        let raw = r#"{"Education": [{"degree": "BSc"}], "Skills": ["Rust"]}"#;
        let value = interpret_completion(raw);
        assert_eq!(value["Skills"][0], "Rust");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_fenced_json_is_unwrapped() {
        let raw = "```json\n{\"Certifications\": []}\n```";
        let value = interpret_completion(raw);
        assert!(value["Certifications"].is_array());
    }

    #[test]
    fn test_non_json_reply_soft_fails_with_raw_text() {
        let raw = "Sure! Here is the resume: Education - MIT";
        let value = interpret_completion(raw);
        assert_eq!(value["error"], PARSE_FAILURE_MARKER);
        assert_eq!(value["raw"], raw);
    }

    #[test]
    fn test_unexpected_keys_are_not_validated() {
        let value = interpret_completion(r#"{"Hobbies": ["chess"]}"#);
        assert_eq!(value["Hobbies"][0], "chess");
    }

    #[tokio::test]
    async fn test_parse_resume_soft_fails_on_prose_reply() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/chat/completions")
                    .body_contains("Resume text: Jane Doe");
                then.status(200).json_body(json!({
                    "choices": [{"message": {"content": "I could not parse that."}}]
                }));
            })
            .await;

        let llm = LlmClient::new("k".to_string(), server.base_url());
        let value = parse_resume("Jane Doe", &llm).await.unwrap();

        assert_eq!(value["error"], PARSE_FAILURE_MARKER);
        assert_eq!(value["raw"], "I could not parse that.");
    }

    #[tokio::test]
    async fn test_parse_resume_soft_fails_without_choices() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(200).json_body(json!({"choices": []}));
            })
            .await;

        let llm = LlmClient::new("k".to_string(), server.base_url());
        let value = parse_resume("Jane Doe", &llm).await.unwrap();

        assert_eq!(value["error"], PARSE_FAILURE_MARKER);
        assert!(value["raw"].is_null());
    }

    #[tokio::test]
    async fn test_parse_resume_provider_failure_is_llm_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(401)
                    .json_body(json!({"error": {"message": "bad key"}}));
            })
            .await;

        let llm = LlmClient::new("k".to_string(), server.base_url());
        let err = parse_resume("Jane Doe", &llm).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
