//! Slug resolution with fail-open fallback.
//!
//! Resolution failures are never surfaced to the end user: unknown slugs
//! and store errors both redirect to the configured front-end, so the only
//! record of a failure is the server-side log entry.

use std::sync::Arc;

use crate::domain::repositories::MappingRepository;

/// Service resolving redirect slugs to their destination URL.
pub struct RedirectService<R: MappingRepository> {
    mappings: Arc<R>,
    /// Front-end URL used when a slug cannot be resolved.
    fallback_url: String,
}

impl<R: MappingRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(mappings: Arc<R>, fallback_url: String) -> Self {
        Self {
            mappings,
            fallback_url,
        }
    }

    /// Resolves a slug to its redirect destination.
    ///
    /// On success the stored link is normalized to carry an explicit scheme
    /// (`https://` is prefixed when none is present). On a miss or a store
    /// error the configured fallback URL is returned instead; this method
    /// never fails.
    pub async fn resolve(&self, slug: &str) -> String {
        match self.mappings.find_by_slug(slug).await {
            Ok(Some(found)) => {
                let destination = ensure_scheme(found.original_link);
                tracing::info!(slug = %slug, url = %destination, "Redirecting");
                destination
            }
            Ok(None) => {
                tracing::info!(slug = %slug, "Unknown slug, redirecting to front-end");
                self.fallback_url.clone()
            }
            Err(e) => {
                tracing::error!(slug = %slug, error = %e, "Mapping lookup failed, redirecting to front-end");
                self.fallback_url.clone()
            }
        }
    }
}

/// Prefixes `https://` when the stored link carries no http(s) scheme.
fn ensure_scheme(link: String) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        link
    } else {
        format!("https://{link}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkMapping;
    use crate::domain::repositories::MockMappingRepository;
    use crate::error::AppError;
    use chrono::Utc;

    const FALLBACK: &str = "https://fakelinks.example";

    fn service(repo: MockMappingRepository) -> RedirectService<MockMappingRepository> {
        RedirectService::new(Arc::new(repo), FALLBACK.to_string())
    }

    #[tokio::test]
    async fn test_resolve_prefixes_https() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_slug()
            .withf(|slug| slug == "example-account-suspended-132")
            .returning(|slug| {
                Ok(Some(LinkMapping::new(
                    1,
                    "example.com/path".to_string(),
                    slug.to_string(),
                    Utc::now(),
                )))
            });

        let destination = service(repo).resolve("example-account-suspended-132").await;
        assert_eq!(destination, "https://example.com/path");
    }

    #[tokio::test]
    async fn test_resolve_keeps_existing_scheme() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_slug().returning(|slug| {
            Ok(Some(LinkMapping::new(
                1,
                "http://example.com".to_string(),
                slug.to_string(),
                Utc::now(),
            )))
        });

        let destination = service(repo).resolve("some-slug").await;
        assert_eq!(destination, "http://example.com");
    }

    #[tokio::test]
    async fn test_unknown_slug_falls_back() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_slug().returning(|_| Ok(None));

        let destination = service(repo).resolve("unknown-slug-xyz").await;
        assert_eq!(destination, FALLBACK);
    }

    #[tokio::test]
    async fn test_store_error_falls_back() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_by_slug()
            .returning(|_| Err(AppError::internal("Database error")));

        let destination = service(repo).resolve("any-slug").await;
        assert_eq!(destination, FALLBACK);
    }
}
