#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tinylink::application::services::LinkService;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::InMemoryLinkRepository;
use tinylink::routes::routes;
use tinylink::state::AppState;

/// Directory that never exists, so every unrouted path reaches the redirect.
pub const NO_STATIC_DIR: &str = "tests/fixtures/does-not-exist";

/// Directory holding a couple of real asset files.
pub const STATIC_FIXTURES: &str = "tests/fixtures/public";

pub fn create_test_state(repo: Arc<dyn LinkRepository>) -> AppState {
    let link_service = Arc::new(LinkService::new(repo, Duration::from_secs(5)));
    AppState::new(link_service)
}

/// Builds a server over the full router backed by a fresh in-memory store.
pub fn make_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    make_server_with_static(NO_STATIC_DIR)
}

pub fn make_server_with_static(static_dir: &str) -> (TestServer, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = create_test_state(repo.clone());
    let server = TestServer::new(routes(state, static_dir)).unwrap();
    (server, repo)
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, target_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn total_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT total_clicks FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
