//! Text-generation provider trait and error types.

use async_trait::async_trait;

/// Errors that can occur during a provider call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Transport(String),

    #[error("Provider request timed out")]
    Timeout,

    #[error("Provider returned an error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Provider returned an empty response")]
    EmptyResponse,
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Trait for single-prompt text generation.
///
/// Implementations must be thread-safe. Exactly one outbound call is made
/// per invocation; callers treat any failure (including timeout) as a
/// terminal generation error and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends a single natural-language prompt and returns the provider's
    /// raw text output.
    async fn complete(&self, prompt: &str) -> ProviderResult<String>;
}
