//! Mapping entity pairing a prank slug with its original URL.

use chrono::{DateTime, Utc};

/// A persisted association between a redirect slug and the legitimate URL
/// it resolves to.
///
/// Mappings are insert-only: they are never updated and there is no
/// expiry or deletion path.
#[derive(Debug, Clone)]
pub struct LinkMapping {
    pub id: i64,
    pub original_link: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl LinkMapping {
    /// Creates a new LinkMapping instance.
    pub fn new(id: i64, original_link: String, slug: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_link,
            slug,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub original_link: String,
    pub slug: String,
}
