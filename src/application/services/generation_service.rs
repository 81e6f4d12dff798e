//! Prompt construction and provider-output parsing for the two generation
//! modes.
//!
//! Educational generation asks the provider for a strict two-field JSON
//! object; prank generation asks for a single raw slug string. Both modes
//! make exactly one provider call, bounded by the client's timeout, and fail
//! closed on malformed output. Failures are never retried.

use serde::Deserialize;
use std::sync::Arc;

use crate::domain::technique::Technique;
use crate::error::AppError;
use crate::infrastructure::provider::{ProviderError, TextGenerator};

/// Expected provider payload for educational mode. Exactly these two string
/// fields; anything else fails the parse.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EducationalPayload {
    fake_link: String,
    explanation: String,
}

/// A successfully generated educational example.
#[derive(Debug, Clone)]
pub struct EducationalArtifact {
    pub fake_link: String,
    pub explanation: String,
    pub technique: Technique,
}

/// Service producing deceptive-link artifacts via the text-generation
/// provider.
pub struct GenerationService {
    generator: Arc<dyn TextGenerator>,
}

impl GenerationService {
    /// Creates a new generation service.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generates a lookalike URL for `technique` plus a short explanation.
    ///
    /// The provider response is stripped of surrounding markdown code
    /// fences before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Generation`] on provider failure, timeout, or
    /// any deviation from the expected two-field JSON payload.
    pub async fn educational(
        &self,
        technique: Technique,
        link: &str,
    ) -> Result<EducationalArtifact, AppError> {
        let prompt = educational_prompt(technique, link);

        let output = self
            .generator
            .complete(&prompt)
            .await
            .map_err(|e| provider_failure("educational summary", e))?;

        let stripped = strip_code_fences(&output);
        let payload: EducationalPayload = serde_json::from_str(stripped).map_err(|e| {
            AppError::generation(
                "Something went wrong while generating the educational summary. Please try again.",
                Some(format!("unparseable provider output: {e}")),
            )
        })?;

        Ok(EducationalArtifact {
            fake_link: payload.fake_link,
            explanation: payload.explanation,
            technique,
        })
    }

    /// Generates a suspicious-looking slug for the given link.
    ///
    /// The provider's trimmed raw text output becomes the slug; no JSON
    /// parsing. Output that cannot serve as a single URL path segment is a
    /// generation error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Generation`] on provider failure, timeout, or
    /// unusable output.
    pub async fn prank(&self, link: &str) -> Result<String, AppError> {
        let prompt = prank_prompt(link);

        let output = self
            .generator
            .complete(&prompt)
            .await
            .map_err(|e| provider_failure("prank link", e))?;

        let slug = output.trim();
        if slug.is_empty() || slug.contains(char::is_whitespace) || slug.contains('/') {
            return Err(AppError::generation(
                "Something went wrong while generating the prank link. Please try again.",
                Some(format!("unusable slug: {slug:?}")),
            ));
        }

        Ok(slug.to_string())
    }
}

fn provider_failure(what: &str, e: ProviderError) -> AppError {
    AppError::generation(
        format!("Something went wrong while generating the {what}. Please try again."),
        Some(e.to_string()),
    )
}

/// Removes one surrounding markdown code fence, with an optional `json`
/// language tag, leaving other content untouched.
fn strip_code_fences(output: &str) -> &str {
    let trimmed = output.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

fn educational_prompt(technique: Technique, link: &str) -> String {
    let mut definitions = String::new();
    for t in Technique::ALL {
        definitions.push_str("- ");
        definitions.push_str(t.as_str());
        definitions.push_str(": ");
        definitions.push_str(t.definition());
        definitions.push('\n');
    }

    format!(
        r#"You are a phishing URL generator and cybersecurity educator.

Given the legitimate URL "{link}" and the phishing technique "{technique}", return a JSON object with exactly two fields:
1. "fake_link": A realistic phishing URL using the specified technique
2. "explanation": A 3-4 sentence explanation covering: what technique is used, why it is effective, and how to spot it

Technique definitions:
{definitions}
Do not wrap the response in markdown code fences or backticks. Return raw JSON only.
Respond with ONLY valid JSON, no markdown, no extra text:
{{"fake_link": "...", "explanation": "..."}}"#,
        technique = technique.as_str(),
    )
}

fn prank_prompt(link: &str) -> String {
    format!(
        r#"You are a prank link generator. Given the legitimate URL "{link}", generate a single fake-looking suspicious link string that appears related to the domain or content of the URL but looks obviously sketchy (e.g. if given amazon.com, return something like amazon-free-gift-exe.zip or amazon_login_verify-132.exe.zip). Return only the raw link string, no JSON, no explanation, no markdown."#
    )
}
