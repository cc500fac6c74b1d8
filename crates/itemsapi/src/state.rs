//! Application state shared by every invocation.
//!
//! Built once at cold start and passed by reference into the handler, so the
//! store client is reused across invocations on the same instance.

use std::sync::Arc;

use itemsapi_core::storage::{ItemRepository, ScanLimit};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    /// Item repository (DynamoDB in production).
    pub item_repo: Arc<dyn ItemRepository>,
    /// Cap applied to list requests.
    pub scan_limit: ScanLimit,
}

impl AppState {
    pub fn new(item_repo: Arc<dyn ItemRepository>, config: &Config) -> Self {
        Self {
            item_repo,
            scan_limit: config.scan_limit,
        }
    }

    /// State backed by an empty in-memory repository.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            item_repo: Arc::new(crate::storage::InMemoryRepository::new()),
            scan_limit: ScanLimit::DEFAULT,
        }
    }
}
