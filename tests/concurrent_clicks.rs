use std::sync::Arc;
use std::time::Duration;
use tinylink::application::services::LinkService;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::InMemoryLinkRepository;

const REDIRECTS: i64 = 200;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_redirects_lose_no_clicks() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    repo.create("busy01", "https://example.com").await.unwrap();

    let service = Arc::new(LinkService::new(repo.clone(), Duration::from_secs(5)));

    let handles: Vec<_> = (0..REDIRECTS)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.resolve_and_count("busy01").await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "https://example.com");
    }

    let link = repo.get_by_code("busy01").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, REDIRECTS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_of_same_code_admit_one() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let service = Arc::new(LinkService::new(repo.clone(), Duration::from_secs(5)));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                let url = format!("https://example.com/{i}");
                service.create_link(Some(url.as_str()), Some("race01")).await
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(e) => assert_eq!(e, tinylink::AppError::CodeTaken),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}
