//! Handler for the link creation endpoint.

use axum::{Json, extract::State};

use crate::api::dto::create_link::{CreateLinkRequest, ReturnLinkResponse};
use crate::application::services::validate_create_link;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a deceptive link artifact for a legitimate URL.
///
/// # Endpoint
///
/// `POST /api/v1/links`
///
/// # Request Body
///
/// ```json
/// {
///   "link": "amazon.com",
///   "mode": "educational",
///   "exclude": ["homoglyphs", "punycode"]
/// }
/// ```
///
/// # Response
///
/// Educational mode:
///
/// ```json
/// {
///   "link": "amazon.com",
///   "fake_link": "https://arnazon.com/signin",
///   "technique": "character-substitution",
///   "explanation": "...",
///   "mode": "educational"
/// }
/// ```
///
/// Prank mode (`technique`/`explanation` omitted, `fake_link` is the
/// redirect URL backed by a persisted mapping):
///
/// ```json
/// {
///   "link": "https://example.com/path",
///   "fake_link": "https://go.fakelinks.example/example-account-suspended-132",
///   "mode": "prank"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure (specific machine code)
/// or generation failure (`GENERATION_FAILED`), and 500 Internal Server
/// Error when the mapping cannot be persisted.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<ReturnLinkResponse>, AppError> {
    let valid = validate_create_link(&payload.link, &payload.mode, payload.exclude.as_deref())?;

    let link = valid.link.clone();
    let mode = valid.mode;

    let result = state.link_service.create(valid).await?;

    Ok(Json(ReturnLinkResponse::new(link, mode, result)))
}
