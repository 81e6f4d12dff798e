//! Repository trait for link mapping data access.

use crate::domain::entities::{LinkMapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for persisting and resolving link mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already mapped.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<LinkMapping, AppError>;

    /// Finds the most recent mapping for an exact slug match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<LinkMapping>, AppError>;
}
