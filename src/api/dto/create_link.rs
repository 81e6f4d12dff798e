//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::GenerationResult;
use crate::domain::mode::Mode;

/// Request to create a deceptive link artifact.
///
/// Fields stay loosely typed here; [`crate::application::services::validation`]
/// turns them into a typed request and reports the first failing check with
/// its machine code. `exclude: None` (field absent or `null`) is
/// distinguished from an empty list, which is valid.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub mode: String,

    /// Technique identifiers to exclude from selection. Consumed by
    /// educational mode only.
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

/// Response containing the generated artifact.
#[derive(Debug, Serialize)]
pub struct ReturnLinkResponse {
    /// The legitimate URL from the request.
    pub link: String,

    /// Educational mode: the generated lookalike URL.
    /// Prank mode: the full redirect URL (redirect host + slug).
    pub fake_link: String,

    /// Technique used; educational mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,

    /// Why the lookalike works and how to spot it; educational mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    pub mode: String,
}

impl ReturnLinkResponse {
    /// Assembles the wire response from a generation result.
    pub fn new(link: String, mode: Mode, result: GenerationResult) -> Self {
        match result {
            GenerationResult::Educational {
                fake_link,
                technique,
                explanation,
            } => Self {
                link,
                fake_link,
                technique: Some(technique.as_str().to_string()),
                explanation: Some(explanation),
                mode: mode.as_str().to_string(),
            },
            GenerationResult::Prank { display_link, .. } => Self {
                link,
                fake_link: display_link,
                technique: None,
                explanation: None,
                mode: mode.as_str().to_string(),
            },
        }
    }
}
