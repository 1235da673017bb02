//! Completion clients
//!
//! One blocking request per run, no retries.

use std::time::Duration;

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::GenerationError;

pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model used when none is given on the command line
pub const DEFAULT_MODEL: &str = "qwen/qwen3-30b-a3b:free";

const MAX_TOKENS: u32 = 50_000;

/// Text-generation backend
pub trait CompletionClient {
    /// Sends the prompt as a single user message and returns the reply text
    fn complete(&self, prompt: &str) -> Result<String, GenerationError>;

    fn model_name(&self) -> &str;
}

/// OpenRouter chat-completions client
pub struct OpenRouterClient {
    api_key: String,
    model: String,
    url: String,
    client: reqwest::blocking::Client,
}

impl OpenRouterClient {
    /// Requests carry no timeout. A full generation can run for minutes.
    pub fn new(api_key: String, model: &str) -> Result<Self, GenerationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| GenerationError::Request {
                message: format!("could not build HTTP client: {}", e),
                status: None,
                body: None,
            })?;

        Ok(Self {
            api_key,
            model: model.to_string(),
            url: OPENROUTER_URL.to_string(),
            client,
        })
    }

    /// Points the client at another OpenAI-compatible endpoint
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": &self.model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": MAX_TOKENS,
        })
    }
}

impl CompletionClient for OpenRouterClient {
    fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        info!(url = %self.url, model = %self.model, "sending completion request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .map_err(|e| GenerationError::Request {
                message: e.to_string(),
                status: None,
                body: None,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::Request {
                message: format!("HTTP status {}", status),
                status: Some(status.as_u16()),
                body: Some(body),
            });
        }
        info!(status = status.as_u16(), "response received");

        let text = response.text().map_err(|e| GenerationError::Request {
            message: format!("could not read response body: {}", e),
            status: Some(status.as_u16()),
            body: None,
        })?;
        let payload: Value = serde_json::from_str(&text).map_err(|e| GenerationError::Request {
            message: format!("invalid JSON in response: {}", e),
            status: Some(status.as_u16()),
            body: Some(text.clone()),
        })?;

        extract_completion(&payload)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions payload.
/// Unexpected shapes are reported with the offending JSON.
pub fn extract_completion(payload: &Value) -> Result<String, GenerationError> {
    if let Some(map) = payload.as_object() {
        debug!(fields = ?map.keys().collect::<Vec<_>>(), "response structure");
    }

    let choices = match payload.get("choices") {
        Some(choices) => choices,
        None => {
            return Err(GenerationError::UnexpectedResponse(format!(
                "Full response: {}",
                pretty(payload)
            )))
        }
    };

    let message = choices
        .as_array()
        .and_then(|list| list.first())
        .and_then(|first| first.get("message"));

    match message {
        Some(message) => Ok(message
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()),
        None => Err(GenerationError::UnexpectedResponse(format!(
            "Choices content: {}",
            pretty(choices)
        ))),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
