//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state cloned into each request.
///
/// Holds no mutable data of its own; the only shared resource is the store
/// handle inside [`LinkService`].
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Creates the state around a constructed link service.
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
