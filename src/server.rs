//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, service wiring, and the two
//! sibling Axum listeners (public API + redirect).

use crate::application::services::{GenerationService, LinkService, RedirectService};
use crate::config::Config;
use crate::infrastructure::persistence::PgMappingRepository;
use crate::infrastructure::provider::OpenAiGenerator;
use crate::routes::{api_router, redirect_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Runs both listeners with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (with per-connection statement timeout)
/// - Migrations
/// - Text-generation provider client
/// - Public API and redirect listeners
///
/// The listeners share one pool and one set of services; a fatal error on
/// either terminates the process.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Either listener fails to bind
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let connect_options = PgConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .options([(
            "statement_timeout",
            format!("{}s", config.db_statement_timeout),
        )]);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(connect_options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let pool = Arc::new(pool);
    let mappings = Arc::new(PgMappingRepository::new(pool.clone()));

    let generator = Arc::new(OpenAiGenerator::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.openai_base_url.clone(),
        Duration::from_secs(config.generation_timeout_seconds),
    )?);
    let generation = GenerationService::new(generator);

    let link_service = Arc::new(LinkService::new(
        mappings.clone(),
        generation,
        config.display_base(),
    ));
    let redirect_service = Arc::new(RedirectService::new(mappings, config.frontend_url.clone()));

    let state = AppState {
        db: pool,
        link_service,
        redirect_service,
    };

    let api_addr: SocketAddr = config.listen_addr.parse()?;
    let redirect_addr: SocketAddr = config.redirect_listen_addr.parse()?;

    let api_listener = tokio::net::TcpListener::bind(api_addr).await?;
    let redirect_listener = tokio::net::TcpListener::bind(redirect_addr).await?;
    tracing::info!("Public API listening on http://{api_addr}");
    tracing::info!("Redirect listening on http://{redirect_addr}");

    let api = async { axum::serve(api_listener, api_router(state.clone())).await };
    let redirect = async { axum::serve(redirect_listener, redirect_router(state.clone())).await };

    tokio::try_join!(api, redirect)?;

    Ok(())
}
