//! OpenAI-compatible client - ModelClient over a chat completions API.
//!
//! Works against any OpenAI-style `/v1/chat/completions` endpoint, so the
//! service can point at a hosted provider or a self-hosted deployment of a
//! clinical model behind an OpenAI-style server.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAICompatibleConfig::new(api_key)
//!     .with_model("gpt-4o-mini")
//!     .with_base_url("https://api.openai.com");
//!
//! let client = OpenAICompatibleClient::new(config);
//! ```
//!
//! No retries here: a transport failure surfaces immediately, and retry
//! policy belongs to whatever service layer sits above the pipeline.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{ModelClient, ModelError};

/// Configuration for an OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleConfig {
    /// API key for bearer authentication.
    api_key: Secret<String>,
    /// Model to request (e.g., "gpt-4o-mini").
    pub model: String,
    /// Base URL of the service, without the `/v1/...` path.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAICompatibleConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model to request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// ModelClient implementation for OpenAI-compatible APIs.
pub struct OpenAICompatibleClient {
    config: OpenAICompatibleConfig,
    client: Client,
}

impl OpenAICompatibleClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: OpenAICompatibleConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ModelClient for OpenAICompatibleClient {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ModelError::network(format!("Connection failed: {}", e))
                } else {
                    ModelError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => ModelError::AuthenticationFailed,
                code => ModelError::status(code, body),
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ModelError::malformed(format!("Failed to decode response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ModelError::malformed("response contained no message content"))
    }
}

// ----- Chat completions wire types -----

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = OpenAICompatibleConfig::new("test-key")
            .with_model("gpt-4-turbo")
            .with_base_url("https://llm.internal.example")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.model, "gpt-4-turbo");
        assert_eq!(config.base_url, "https://llm.internal.example");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_defaults_match_hosted_openai() {
        let config = OpenAICompatibleConfig::new("k");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "https://api.openai.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn completions_url_appends_v1_path() {
        let client = OpenAICompatibleClient::new(
            OpenAICompatibleConfig::new("k").with_base_url("https://api.openai.com"),
        );
        assert_eq!(
            client.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn completions_url_tolerates_trailing_slash() {
        let client = OpenAICompatibleClient::new(
            OpenAICompatibleConfig::new("k").with_base_url("https://api.openai.com/"),
        );
        assert_eq!(
            client.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn response_envelope_decodes_content() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"{\"urgency\":\"soon\"}"}}]}"#;
        let decoded: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            decoded.choices[0].message.content.as_deref(),
            Some("{\"urgency\":\"soon\"}")
        );
    }

    #[test]
    fn response_envelope_tolerates_missing_choices() {
        let decoded: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(decoded.choices.is_empty());
    }
}
