//! Result of a generation run, variant over the request mode.

use crate::domain::technique::Technique;

/// The artifact produced for a creation request.
///
/// Ephemeral: the prank variant's slug and the original link are persisted
/// as a [`super::LinkMapping`], but the result itself is assembled per
/// request and never stored.
#[derive(Debug, Clone)]
pub enum GenerationResult {
    /// Pure content generation; nothing persisted, nothing redirected.
    Educational {
        fake_link: String,
        technique: Technique,
        explanation: String,
    },
    /// Generation that becomes infrastructure: the slug resolves later via
    /// the redirect listener.
    Prank {
        slug: String,
        /// Full redirect URL formed from the redirect host and the slug.
        display_link: String,
    },
}
