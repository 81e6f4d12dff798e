//! OpenAI-compatible chat-completions client.
//!
//! Works against api.openai.com by default; a custom base URL can be
//! supplied for OpenAI-compatible providers.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::service::{ProviderError, ProviderResult, TextGenerator};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Upper bound on generated output. Both generation modes produce short
/// artifacts (a URL + a few sentences, or a single slug).
const MAX_COMPLETION_TOKENS: u32 = 1024;

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
///
/// The request timeout bounds the whole provider call; on expiry the call
/// is abandoned and surfaces as [`ProviderError::Timeout`].
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiGenerator {
    /// Creates a new generator.
    ///
    /// `base_url` overrides the default OpenAI endpoint; a bare base URL is
    /// normalized to its `/chat/completions` route.
    pub fn new(
        api_key: String,
        model: String,
        base_url: Option<String>,
        timeout: Duration,
    ) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let endpoint = match base_url {
            Some(url) if url.ends_with("/chat/completions") => url,
            Some(url) => format!("{}/chat/completions", url.trim_end_matches('/')),
            None => OPENAI_API_URL.to_string(),
        };

        Ok(Self {
            client,
            api_key,
            model,
            endpoint,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn complete(&self, prompt: &str) -> ProviderResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            max_tokens: MAX_COMPLETION_TOKENS,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Transport(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(base_url: Option<&str>) -> OpenAiGenerator {
        OpenAiGenerator::new(
            "test-key".to_string(),
            "gpt-4o".to_string(),
            base_url.map(String::from),
            Duration::from_secs(60),
        )
        .unwrap()
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            generator(None).endpoint,
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_custom_base_url_is_normalized() {
        assert_eq!(
            generator(Some("https://llm.internal/v1")).endpoint,
            "https://llm.internal/v1/chat/completions"
        );

        assert_eq!(
            generator(Some("https://llm.internal/v1/")).endpoint,
            "https://llm.internal/v1/chat/completions"
        );
    }

    #[test]
    fn test_full_endpoint_is_kept() {
        assert_eq!(
            generator(Some("https://llm.internal/v1/chat/completions")).endpoint,
            "https://llm.internal/v1/chat/completions"
        );
    }
}
