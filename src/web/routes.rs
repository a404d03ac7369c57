//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, stats_handler};
use axum::{Router, routing::get};

/// Dashboard pages.
///
/// # Endpoints
///
/// - `GET /` - Dashboard with link list and create form
/// - `GET /code/{code}` - Statistics page for a single link
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/code/{code}", get(stats_handler))
}
