use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService};
use crate::infrastructure::persistence::PgMappingRepository;

/// Shared application state injected into all handlers.
///
/// Both listeners clone the same state, so they share one connection pool
/// and one set of services.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub link_service: Arc<LinkService<PgMappingRepository>>,
    pub redirect_service: Arc<RedirectService<PgMappingRepository>>,
}
