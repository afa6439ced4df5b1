//! Advice provider clients

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::AdviceError;
use super::prompt::build_prompt;
use crate::config::AdviceSettings;

/// Environment variable holding the provider API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Turns a transaction summary into advice text
#[async_trait]
pub trait AdvisorClient: Send + Sync {
    async fn advise(&self, summary: &str) -> Result<String, AdviceError>;
}

/// Client for the OpenAI Responses API
pub struct OpenAiAdvisor {
    client: Client,
    api_key: String,
    settings: AdviceSettings,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: String,
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ResponsesBody {
    #[serde(default)]
    output: Vec<OutputItem>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ApiError,
}

impl OpenAiAdvisor {
    pub fn new(api_key: impl Into<String>, settings: AdviceSettings) -> Result<Self, AdviceError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AdviceError::MissingApiKey(API_KEY_ENV.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            settings,
        })
    }

    /// Build a client from the `OPENAI_API_KEY` environment variable
    pub fn from_env(settings: AdviceSettings) -> Result<Self, AdviceError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AdviceError::MissingApiKey(API_KEY_ENV.to_string()))?;
        Self::new(api_key, settings)
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AdvisorClient for OpenAiAdvisor {
    async fn advise(&self, summary: &str) -> Result<String, AdviceError> {
        let request = ResponsesRequest {
            model: &self.settings.model,
            input: build_prompt(summary),
            max_output_tokens: self.settings.max_output_tokens,
            temperature: self.settings.temperature,
        };

        debug!(model = %self.settings.model, "requesting financial advice");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AdviceError::Provider(provider_error_message(status.as_u16(), &body)));
        }

        parse_advice(&body)
    }
}

/// Best-effort error text from a failed provider response
fn provider_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => format!("{} (HTTP {})", parsed.error.message, status),
        Err(_) => format!("HTTP {}", status),
    }
}

/// Join every `output_text` part of a Responses API body
fn parse_advice(body: &str) -> Result<String, AdviceError> {
    let parsed: ResponsesBody = serde_json::from_str(body)
        .map_err(|e| AdviceError::Provider(format!("Unexpected response: {}", e)))?;

    if let Some(error) = parsed.error {
        return Err(AdviceError::Provider(error.message));
    }

    let text = parsed
        .output
        .iter()
        .flat_map(|item| item.content.iter())
        .filter(|part| part.kind == "output_text")
        .filter_map(|part| part.text.as_deref())
        .collect::<Vec<_>>()
        .join("\n");

    if text.trim().is_empty() {
        Err(AdviceError::EmptyResponse)
    } else {
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_text() {
        let body = r#"{
            "id": "resp_1",
            "output": [
                {"type": "reasoning", "content": []},
                {"type": "message", "role": "assistant", "content": [
                    {"type": "output_text", "text": "1. Cut dining out.", "annotations": []},
                    {"type": "output_text", "text": "2. Save 10% of salary."}
                ]}
            ]
        }"#;

        assert_eq!(
            parse_advice(body).unwrap(),
            "1. Cut dining out.\n2. Save 10% of salary."
        );
    }

    #[test]
    fn test_parse_empty_output() {
        assert_eq!(
            parse_advice(r#"{"output": []}"#).unwrap_err(),
            AdviceError::EmptyResponse
        );
    }

    #[test]
    fn test_parse_error_field() {
        let err = parse_advice(r#"{"error": {"message": "Rate limit reached"}}"#).unwrap_err();
        assert_eq!(err, AdviceError::Provider("Rate limit reached".into()));
    }

    #[test]
    fn test_provider_error_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            provider_error_message(401, body),
            "Incorrect API key provided (HTTP 401)"
        );
        assert_eq!(provider_error_message(502, "<html>"), "HTTP 502");
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let err = OpenAiAdvisor::new("  ", AdviceSettings::default()).err().unwrap();
        assert_eq!(err, AdviceError::MissingApiKey(API_KEY_ENV.to_string()));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let settings = AdviceSettings {
            base_url: "http://localhost:8080/v1/".into(),
            ..AdviceSettings::default()
        };
        let advisor = OpenAiAdvisor::new("sk-test", settings).unwrap();
        assert_eq!(advisor.endpoint(), "http://localhost:8080/v1/responses");
    }
}
