use async_trait::async_trait;

use crate::item::{Item, ItemUpdate};

use super::{Result, ScanLimit};

/// Repository for item operations.
///
/// Every method maps to exactly one call against the backing store. None of
/// them check for prior existence: writes are upserts and deletes are
/// idempotent.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its ID.
    async fn get_item(&self, id: &str) -> Result<Option<Item>>;

    /// Returns up to `limit` items in no particular order.
    async fn scan_items(&self, limit: ScanLimit) -> Result<Vec<Item>>;

    /// Writes an item, replacing any existing item with the same ID.
    async fn put_item(&self, item: &Item) -> Result<()>;

    /// Sets the attributes in `update` and returns the full record afterwards.
    async fn update_item(&self, id: &str, update: &ItemUpdate) -> Result<Item>;

    /// Deletes an item by its ID. Deleting a missing item succeeds.
    async fn delete_item(&self, id: &str) -> Result<()>;
}
