//! Process-local link repository.
//!
//! Backs the HTTP tests and local experiments without a database. Every
//! operation runs under one lock, which gives the same atomicity the SQL
//! store gets from single statements.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::StoreError;

#[derive(Default)]
struct Inner {
    links: HashMap<String, (u64, Link)>,
    next_seq: u64,
}

/// In-memory [`LinkRepository`] keyed by code.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Inner>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, code: &str, target_url: &str) -> Result<Link, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.links.contains_key(code) {
            return Err(StoreError::ConstraintViolation {
                constraint: Some("links_pkey".to_string()),
            });
        }

        let link = Link::new(code.to_string(), target_url.to_string(), Utc::now());
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.links.insert(code.to_string(), (seq, link.clone()));

        Ok(link)
    }

    async fn get_all(&self) -> Result<Vec<Link>, StoreError> {
        let inner = self.inner.read().await;

        let mut entries: Vec<&(u64, Link)> = inner.links.values().collect();
        entries.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at.cmp(&a.created_at).then(seq_b.cmp(seq_a))
        });

        Ok(entries.into_iter().map(|(_, link)| link.clone()).collect())
    }

    async fn get_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.links.get(code).map(|(_, link)| link.clone()))
    }

    async fn delete(&self, code: &str) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(u64::from(inner.links.remove(code).is_some()))
    }

    async fn increment_click(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let mut inner = self.inner.write().await;

        Ok(inner.links.get_mut(code).map(|(_, link)| {
            link.record_click(Utc::now());
            link.clone()
        }))
    }
}
