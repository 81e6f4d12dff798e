#![allow(dead_code)]

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use fakelinks::application::services::{GenerationService, LinkService, RedirectService};
use fakelinks::infrastructure::persistence::PgMappingRepository;
use fakelinks::infrastructure::provider::{ProviderError, ProviderResult, TextGenerator};
use fakelinks::state::AppState;

pub const DISPLAY_BASE: &str = "http://localhost:3001";
pub const FALLBACK_URL: &str = "https://fakelinks.example";

/// Scripted provider double returning a fixed output (or a fixed failure).
pub struct StubGenerator {
    output: Option<String>,
}

impl StubGenerator {
    pub fn returning(output: &str) -> Arc<Self> {
        Arc::new(Self {
            output: Some(output.to_string()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { output: None })
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn complete(&self, _prompt: &str) -> ProviderResult<String> {
        match &self.output {
            Some(output) => Ok(output.clone()),
            None => Err(ProviderError::Transport("stub failure".to_string())),
        }
    }
}

pub fn create_test_state(pool: PgPool, generator: Arc<dyn TextGenerator>) -> AppState {
    let pool = Arc::new(pool);

    let mappings = Arc::new(PgMappingRepository::new(pool.clone()));
    let generation = GenerationService::new(generator);

    let link_service = Arc::new(LinkService::new(
        mappings.clone(),
        generation,
        DISPLAY_BASE.to_string(),
    ));
    let redirect_service = Arc::new(RedirectService::new(mappings, FALLBACK_URL.to_string()));

    AppState {
        db: pool,
        link_service,
        redirect_service,
    }
}

pub async fn insert_mapping(pool: &PgPool, original_link: &str, slug: &str) {
    sqlx::query("INSERT INTO link_mappings (original_link, slug) VALUES ($1, $2)")
        .bind(original_link)
        .bind(slug)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn find_original(pool: &PgPool, slug: &str) -> Option<String> {
    sqlx::query_scalar("SELECT original_link FROM link_mappings WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn mapping_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM link_mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}
