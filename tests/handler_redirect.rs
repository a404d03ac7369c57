mod common;

use axum::http::StatusCode;
use serde_json::json;
use tinylink::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = common::make_server();
    repo.create("redir1", "https://example.com/target")
        .await
        .unwrap();

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_click() {
    let (server, repo) = common::make_server();
    repo.create("click1", "https://example.com").await.unwrap();

    server.get("/click1").await;
    server.get("/click1").await;

    let link = repo.get_by_code("click1").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 2);
    assert!(link.last_clicked.is_some());

    let body = server.get("/api/links/click1").await.json::<serde_json::Value>();
    assert_eq!(body["total_clicks"], 2);
    assert!(body["last_clicked"].is_string());
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = common::make_server();

    let response = server.get("/absent1").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_redirect_malformed_code_matches_absent_code() {
    let (server, _repo) = common::make_server();

    let absent = server.get("/absent1").await;
    let malformed = server.get("/x").await;

    assert_eq!(absent.status_code(), malformed.status_code());
    assert_eq!(absent.text(), malformed.text());
}

#[tokio::test]
async fn test_redirect_after_delete() {
    let (server, repo) = common::make_server();
    repo.create("gone01", "https://example.com").await.unwrap();

    server.delete("/api/links/gone01").await.assert_status_ok();

    server.get("/gone01").await.assert_status_not_found();
}

#[tokio::test]
async fn test_static_file_takes_precedence() {
    let (server, _repo) = common::make_server_with_static(common::STATIC_FIXTURES);

    let response = server.get("/robots.txt").await;

    response.assert_status_ok();
    assert!(response.text().contains("User-agent"));
}

#[tokio::test]
async fn test_static_file_shadows_code_with_same_name() {
    let (server, repo) = common::make_server_with_static(common::STATIC_FIXTURES);
    repo.create("abcdef", "https://example.com").await.unwrap();

    let response = server.get("/abcdef").await;

    response.assert_status_ok();
    let link = repo.get_by_code("abcdef").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 0);
}

#[tokio::test]
async fn test_missing_asset_falls_through_to_redirect() {
    let (server, repo) = common::make_server_with_static(common::STATIC_FIXTURES);
    repo.create("viaFS1", "https://example.com/fs").await.unwrap();

    let response = server.get("/viaFS1").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/fs");
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tinylink::infrastructure::persistence::InMemoryLinkRepository;
    use tinylink::routes::app_router;
    use tower::ServiceExt;

    let repo = Arc::new(InMemoryLinkRepository::new());
    repo.create("slash1", "https://example.com").await.unwrap();
    let app = app_router(common::create_test_state(repo), common::NO_STATIC_DIR);

    let response = app
        .oneshot(Request::builder().uri("/slash1/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()["location"], "https://example.com");
}
