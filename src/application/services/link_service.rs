//! Link management and redirect resolution.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, StoreError};
use crate::utils::code_format::is_valid_code;
use crate::utils::target_url::is_absolute_url;

/// Default bound applied to every store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Service for creating, inspecting, deleting and resolving short links.
///
/// Validation happens here, before the store is touched. Store failures are
/// logged at this boundary and surfaced as opaque [`AppError::Internal`] or
/// [`AppError::Timeout`].
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    store_timeout: Duration,
}

impl LinkService {
    /// Creates a new link service with the given per-call store timeout.
    pub fn new(link_repository: Arc<dyn LinkRepository>, store_timeout: Duration) -> Self {
        Self {
            link_repository,
            store_timeout,
        }
    }

    /// Creates a short link for a user-supplied code.
    ///
    /// The existence check only produces a friendlier error; the store's
    /// unique key is authoritative, and a constraint violation on insert is
    /// reported as [`AppError::CodeTaken`] too.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `raw_url` is missing or not an absolute URL
    /// - [`AppError::InvalidCode`] if `raw_code` is missing or malformed
    /// - [`AppError::CodeTaken`] if the code is already in use
    /// - [`AppError::Internal`] / [`AppError::Timeout`] on store failure
    pub async fn create_link(
        &self,
        raw_url: Option<&str>,
        raw_code: Option<&str>,
    ) -> Result<Link, AppError> {
        let url = raw_url
            .filter(|u| is_absolute_url(u))
            .ok_or(AppError::InvalidUrl)?;
        let code = raw_code
            .filter(|c| is_valid_code(c))
            .ok_or(AppError::InvalidCode)?;

        let existing = self
            .bounded(self.link_repository.get_by_code(code))
            .await
            .map_err(|e| store_failure("get_by_code", code, e))?;

        if existing.is_some() {
            debug!(code, "Code already taken");
            return Err(AppError::CodeTaken);
        }

        match self.bounded(self.link_repository.create(code, url)).await {
            Ok(link) => {
                info!(code, target_url = url, "Link created");
                Ok(link)
            }
            Err(StoreError::ConstraintViolation { constraint }) => {
                debug!(code, ?constraint, "Code taken by a concurrent create");
                Err(AppError::CodeTaken)
            }
            Err(e) => Err(store_failure("create", code, e)),
        }
    }

    /// Returns all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.bounded(self.link_repository.get_all())
            .await
            .map_err(|e| store_failure("get_all", "*", e))
    }

    /// Returns the stored record for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_stats(&self, code: &str) -> Result<Link, AppError> {
        self.bounded(self.link_repository.get_by_code(code))
            .await
            .map_err(|e| store_failure("get_by_code", code, e))?
            .ok_or(AppError::NotFound)
    }

    /// Deletes the link for `code`.
    ///
    /// A second delete of the same code, or losing a race with a concurrent
    /// delete, yields [`AppError::NotFound`].
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        let existing = self
            .bounded(self.link_repository.get_by_code(code))
            .await
            .map_err(|e| store_failure("get_by_code", code, e))?;

        if existing.is_none() {
            return Err(AppError::NotFound);
        }

        let removed = self
            .bounded(self.link_repository.delete(code))
            .await
            .map_err(|e| store_failure("delete", code, e))?;

        if removed == 0 {
            debug!(code, "Link removed by a concurrent delete");
            return Err(AppError::NotFound);
        }

        info!(code, "Link deleted");
        Ok(())
    }

    /// Resolves `code` to its target URL, counting one click.
    ///
    /// Malformed codes are indistinguishable from absent ones. The click is
    /// recorded with the store's atomic increment before the target is
    /// returned; if that fails, no target is returned.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code is malformed or absent
    /// - [`AppError::Internal`] / [`AppError::Timeout`] if lookup or increment fails
    pub async fn resolve_and_count(&self, code: &str) -> Result<String, AppError> {
        if !is_valid_code(code) {
            debug!(code, "Malformed code on redirect");
            return Err(AppError::NotFound);
        }

        let found = self
            .bounded(self.link_repository.get_by_code(code))
            .await
            .map_err(|e| store_failure("get_by_code", code, e))?;

        if found.is_none() {
            debug!(code, "Unknown code on redirect");
            return Err(AppError::NotFound);
        }

        let updated = self
            .bounded(self.link_repository.increment_click(code))
            .await
            .map_err(|e| store_failure("increment_click", code, e))?
            .ok_or(AppError::NotFound)?;

        debug!(code, total_clicks = updated.total_clicks, "Click recorded");

        Ok(updated.target_url)
    }

    /// Applies the store timeout to a repository call.
    async fn bounded<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::time::timeout(self.store_timeout, call)
            .await
            .map_err(|_| StoreError::Timeout)?
    }
}

/// Logs a store failure and converts it to its client-facing error.
fn store_failure(operation: &'static str, code: &str, e: StoreError) -> AppError {
    error!(operation, code, error = %e, "Link store call failed");

    match e {
        StoreError::Timeout => AppError::Timeout,
        StoreError::ConstraintViolation { .. }
        | StoreError::CheckViolation { .. }
        | StoreError::Unavailable(_) => AppError::Internal,
    }
}
