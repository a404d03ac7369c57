//! Top-level router configuration combining API, pages, assets and redirects.
//!
//! # Route Structure
//!
//! - `GET  /healthz`      - Liveness check
//! - `GET  /`             - Dashboard page
//! - `GET  /code/{code}`  - Stats page
//! - `/api/links*`        - JSON link management API
//! - `GET  /{path}`       - Static asset if one exists, otherwise short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the routed application without path normalization.
///
/// Static assets and short codes share the single-segment namespace. Any
/// path not claimed by an explicit route is first resolved against
/// `static_dir`; only when no file matches does it reach the redirect
/// handler, so real asset paths are never swallowed as codes.
pub fn routes(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let redirect_router = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state.clone());

    let assets_then_redirect = ServeDir::new(static_dir.as_ref()).fallback(redirect_router);

    Router::new()
        .route("/healthz", get(health_handler))
        .merge(web::routes::page_routes())
        .nest("/api", api::routes::api_routes())
        .fallback_service(assets_then_redirect)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/abc123/` resolves the
/// same way as `/abc123`.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(routes(state, static_dir))
}
