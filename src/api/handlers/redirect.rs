//! Handler for prank slug redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::state::AppState;

/// Redirects a prank slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}` (redirect listener)
///
/// # Behavior
///
/// Always answers `308 Permanent Redirect`. The `Location` header carries
/// either the resolved original link (scheme-normalized) or, when the slug
/// is unknown or the store fails, the configured front-end URL. Resolution
/// failures are only visible in the server logs.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Redirect {
    let destination = state.redirect_service.resolve(&slug).await;

    Redirect::permanent(&destination)
}
