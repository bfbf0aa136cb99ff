//! Description-generation client.
//!
//! Drafts promotional product descriptions through the Anthropic
//! Messages API. This is the only network call in the system; the
//! stores never depend on it, and its failure never touches store
//! state. Requests carry an explicit timeout, and in-flight state (a
//! disabled form control) belongs to the caller.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use partsbay_core::Category;

use crate::config::DescribeConfig;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 300;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when generating a description.
#[derive(Debug, Error)]
pub enum DescribeError {
    /// No API credential is configured; the feature is disabled.
    #[error("description generation is not configured")]
    NotConfigured,

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Client for the description-generation service.
#[derive(Clone)]
pub struct DescribeClient {
    client: reqwest::Client,
    model: String,
}

impl DescribeClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `DescribeError::Parse` if the API key contains invalid
    /// header characters and `DescribeError::Http` if the HTTP client
    /// fails to build.
    pub fn new(config: &DescribeConfig) -> Result<Self, DescribeError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(config.api_key.expose_secret())
                .map_err(|e| DescribeError::Parse(format!("invalid API key format: {e}")))?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            model: config.model.clone(),
        })
    }

    /// Generate a promotional description for a part.
    ///
    /// Returns the trimmed plain text of the model's reply.
    ///
    /// # Errors
    ///
    /// Returns `DescribeError::Http` on request failure (including
    /// timeout), `DescribeError::Api` on a non-success status, and
    /// `DescribeError::Parse` when the response carries no text.
    pub async fn generate_description(
        &self,
        product_name: &str,
        category: Category,
    ) -> Result<String, DescribeError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![RequestMessage {
                role: "user",
                content: build_prompt(product_name, category),
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DescribeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DescribeError::Parse(e.to_string()))?;

        let text = body
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(DescribeError::Parse(
                "response contained no text".to_string(),
            ));
        }
        Ok(text.trim().to_string())
    }
}

/// Build the generation prompt for a part.
fn build_prompt(product_name: &str, category: Category) -> String {
    format!(
        "Generate a compelling and concise product description for a used \
         '{product_name}' in the '{category}' category for the PartsBay \
         secondhand marketplace. The target audience is the PC building \
         community. Highlight its potential use cases and value. Keep it \
         professional but friendly. The description must be under 120 words. \
         Do not use markdown or formatting."
    )
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<RequestMessage>,
}

#[derive(Debug, Serialize)]
struct RequestMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_mentions_part_and_constraints() {
        let prompt = build_prompt("RTX 3080", Category::Gpu);
        assert!(prompt.contains("'RTX 3080'"));
        assert!(prompt.contains("'GPU'"));
        assert!(prompt.contains("under 120 words"));
        assert!(prompt.contains("Do not use markdown"));
    }

    #[test]
    fn test_describe_error_display() {
        let err = DescribeError::NotConfigured;
        assert_eq!(err.to_string(), "description generation is not configured");

        let err = DescribeError::Api {
            status: 529,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (529): overloaded");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "content": [
                {"type": "text", "text": "A great card. "},
                {"type": "text", "text": "Buy it."}
            ]
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.content.len(), 2);
    }

    #[test]
    fn test_response_tolerates_unknown_blocks() {
        let json = r#"{
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "Answer"}
            ]
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        let texts: Vec<_> = response
            .content
            .into_iter()
            .filter_map(|b| match b {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect();
        assert_eq!(texts, vec!["Answer"]);
    }
}
