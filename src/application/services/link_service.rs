//! Link creation orchestration.
//!
//! A validated creation request flows technique selection -> generation ->
//! (prank mode only) mapping persistence -> result assembly. Persistence is
//! attempted only after generation succeeds, so a generation failure never
//! leaves an orphaned mapping.

use base64::Engine as _;
use std::sync::Arc;

use crate::application::services::generation_service::GenerationService;
use crate::application::services::validation::ValidatedRequest;
use crate::domain::entities::{GenerationResult, LinkMapping, NewMapping};
use crate::domain::mode::Mode;
use crate::domain::repositories::MappingRepository;
use crate::domain::technique::Technique;
use crate::error::AppError;

/// Random bytes behind the 4-character collision suffix.
const SLUG_SUFFIX_BYTES: usize = 3;

/// Insert attempts before a slug collision becomes a hard failure.
const MAX_INSERT_ATTEMPTS: usize = 3;

/// Service for creating deceptive-link artifacts.
///
/// Educational mode is pure content generation; prank mode persists the
/// generated slug so the redirect listener can resolve it later.
pub struct LinkService<R: MappingRepository> {
    mappings: Arc<R>,
    generation: GenerationService,
    /// Scheme-prefixed base the prank display link is built from, e.g.
    /// `https://go.fakelinks.example` or `http://localhost:3001` in dev.
    display_base: String,
}

impl<R: MappingRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(mappings: Arc<R>, generation: GenerationService, display_base: String) -> Self {
        Self {
            mappings,
            generation,
            display_base,
        }
    }

    /// Produces the artifact for a validated request's mode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Generation`] when the provider call fails and
    /// [`AppError::Internal`] when persistence fails (prank mode only).
    pub async fn create(&self, request: ValidatedRequest) -> Result<GenerationResult, AppError> {
        match request.mode {
            Mode::Educational => self.create_educational(request).await,
            Mode::Prank => self.create_prank(request).await,
        }
    }

    async fn create_educational(
        &self,
        request: ValidatedRequest,
    ) -> Result<GenerationResult, AppError> {
        // Non-empty complement is guaranteed by request validation.
        let technique = Technique::choose_excluding(&request.exclude)
            .ok_or_else(|| AppError::internal("No technique available for selection"))?;

        let artifact = self.generation.educational(technique, &request.link).await?;

        Ok(GenerationResult::Educational {
            fake_link: artifact.fake_link,
            technique,
            explanation: artifact.explanation,
        })
    }

    async fn create_prank(&self, request: ValidatedRequest) -> Result<GenerationResult, AppError> {
        let slug = self.generation.prank(&request.link).await?;
        let mapping = self.persist_mapping(&request.link, slug).await?;

        let display_link = format!(
            "{}/{}",
            self.display_base.trim_end_matches('/'),
            mapping.slug
        );

        Ok(GenerationResult::Prank {
            slug: mapping.slug,
            display_link,
        })
    }

    /// Inserts the mapping, retrying slug collisions with a random suffix.
    async fn persist_mapping(&self, link: &str, slug: String) -> Result<LinkMapping, AppError> {
        let mut candidate = slug.clone();

        for _ in 0..MAX_INSERT_ATTEMPTS {
            let new_mapping = NewMapping {
                original_link: link.to_string(),
                slug: candidate.clone(),
            };

            match self.mappings.insert(new_mapping).await {
                Ok(mapping) => return Ok(mapping),
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(slug = %candidate, "Slug already mapped, retrying with suffix");
                    candidate = format!("{}-{}", slug, random_suffix());
                }
                Err(other) => return Err(other),
            }
        }

        Err(AppError::internal("Failed to find a free slug"))
    }
}

/// URL-safe 4-character suffix for slug collision retries.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
fn random_suffix() -> String {
    let mut buffer = [0u8; SLUG_SUFFIX_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
