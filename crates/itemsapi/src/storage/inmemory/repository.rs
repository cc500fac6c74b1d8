//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Map;
use tokio::sync::RwLock;

use itemsapi_core::item::{Item, ItemUpdate};
use itemsapi_core::storage::{ItemRepository, Result, ScanLimit};

/// In-memory storage backend.
///
/// Mirrors DynamoDB semantics: puts overwrite, updates upsert, deletes of
/// missing items succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<BTreeMap<String, Item>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn scan_items(&self, limit: ScanLimit) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().take(limit.get()).cloned().collect())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        items.insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn update_item(&self, id: &str, update: &ItemUpdate) -> Result<Item> {
        let mut items = self.items.write().await;
        let item = items.entry(id.to_string()).or_insert_with(|| Item {
            id: id.to_string(),
            status: None,
            data: None,
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        });
        update.apply_to(item);
        Ok(item.clone())
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(status: &str) -> ItemUpdate {
        ItemUpdate {
            status: status.to_string(),
            data: json!({"v": 2}),
            updated_at: "2024-01-16T08:00:00.000000Z".to_string(),
        }
    }

    // ==================== Item CRUD Tests ====================

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = InMemoryRepository::new();
        let item = Item::new("item-1").with_status("pending");

        repo.put_item(&item).await.unwrap();

        let retrieved = repo.get_item("item-1").await.unwrap();
        assert_eq!(retrieved, Some(item));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_item("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let repo = InMemoryRepository::new();
        repo.put_item(&Item::new("item-1").with_status("pending"))
            .await
            .unwrap();
        repo.put_item(&Item::new("item-1").with_status("done"))
            .await
            .unwrap();

        let retrieved = repo.get_item("item-1").await.unwrap().unwrap();
        assert_eq!(retrieved.status(), Some("done"));
    }

    #[tokio::test]
    async fn test_update_keeps_other_attributes() {
        let repo = InMemoryRepository::new();
        let item = Item::new("item-1").with_created_at("2024-01-15T10:30:00.000000Z");
        repo.put_item(&item).await.unwrap();

        let updated = repo.update_item("item-1", &update("done")).await.unwrap();

        assert_eq!(updated.status(), Some("done"));
        assert_eq!(updated.data, Some(json!({"v": 2})));
        assert_eq!(
            updated.created_at(),
            Some("2024-01-15T10:30:00.000000Z")
        );
        assert_eq!(repo.get_item("item-1").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_nonexistent_creates() {
        let repo = InMemoryRepository::new();

        let updated = repo.update_item("item-9", &update("active")).await.unwrap();

        assert_eq!(updated.id, "item-9");
        assert!(updated.created_at.is_none());
        assert!(repo.get_item("item-9").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryRepository::new();
        repo.put_item(&Item::new("item-1")).await.unwrap();

        repo.delete_item("item-1").await.unwrap();
        repo.delete_item("item-1").await.unwrap();

        assert!(repo.get_item("item-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scan_respects_limit() {
        let repo = InMemoryRepository::new();
        for i in 0..5 {
            repo.put_item(&Item::new(format!("item-{i}"))).await.unwrap();
        }

        let limited = repo.scan_items(ScanLimit::new(3).unwrap()).await.unwrap();
        assert_eq!(limited.len(), 3);

        let all = repo.scan_items(ScanLimit::DEFAULT).await.unwrap();
        assert_eq!(all.len(), 5);
    }
}
