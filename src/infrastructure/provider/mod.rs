//! Text-generation provider integrations.
//!
//! The [`TextGenerator`] trait abstracts the outbound model call so services
//! depend on a trait object rather than a concrete HTTP client.
//!
//! # Implementations
//!
//! - [`OpenAiGenerator`] - OpenAI-compatible chat-completions client

pub mod openai;
pub mod service;

pub use openai::OpenAiGenerator;
pub use service::{ProviderError, ProviderResult, TextGenerator};

#[cfg(test)]
pub use service::MockTextGenerator;
