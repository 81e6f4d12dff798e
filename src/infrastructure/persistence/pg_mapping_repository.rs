//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{LinkMapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for mapping storage and slug resolution.
///
/// Every lookup is a direct query; there is no caching layer in front of
/// the table.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MappingRow {
    id: i64,
    original_link: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for LinkMapping {
    fn from(row: MappingRow) -> Self {
        LinkMapping::new(row.id, row.original_link, row.slug, row.created_at)
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<LinkMapping, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO link_mappings (original_link, slug)
            VALUES ($1, $2)
            RETURNING id, original_link, slug, created_at
            "#,
        )
        .bind(&new_mapping.original_link)
        .bind(&new_mapping.slug)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<LinkMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, original_link, slug, created_at
            FROM link_mappings
            WHERE slug = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
