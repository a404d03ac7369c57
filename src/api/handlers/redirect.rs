//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Check the code format (malformed codes answer like unknown ones)
/// 2. Look up the link
/// 3. Atomically count the click
/// 4. Return 302 Found with `Location: target_url`
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed or doesn't exist.
/// Returns 500 if the click could not be recorded; no redirect is served then.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = state.link_service.resolve_and_count(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]))
}
