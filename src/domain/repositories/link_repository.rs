//! Repository trait for link data access.

use crate::domain::entities::Link;
use crate::error::StoreError;
use async_trait::async_trait;

/// Durable storage for links.
///
/// Implementations perform no business validation; callers validate codes and
/// URLs before reaching the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with zero clicks and `created_at = now()`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConstraintViolation`] if the code already exists.
    async fn create(&self, code: &str, target_url: &str) -> Result<Link, StoreError>;

    /// Returns every link, newest first.
    ///
    /// Unpaginated; suitable for the low volumes this service targets.
    async fn get_all(&self) -> Result<Vec<Link>, StoreError>;

    /// Point lookup by code.
    async fn get_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Removes the link if present and returns the number of rows removed.
    ///
    /// Deleting an unknown code is not an error.
    async fn delete(&self, code: &str) -> Result<u64, StoreError>;

    /// Atomically adds one click and sets `last_clicked = now()`.
    ///
    /// Returns the updated link, or `None` if the code does not exist.
    async fn increment_click(&self, code: &str) -> Result<Option<Link>, StoreError>;
}
